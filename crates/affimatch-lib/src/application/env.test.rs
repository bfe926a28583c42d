use super::*;

fn env(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    let mut config = EnvironmentConfig::default();
    for (key, value) in pairs {
        let value = Some(value.to_string());
        match *key {
            "NO_COLOR" => config.no_color = value,
            "FORCE_COLOR" => config.force_color = value,
            "CLICOLOR" => config.clicolor = value,
            "CI" => config.ci = value,
            other => panic!("unexpected variable {other}"),
        }
    }
    config
}

#[test]
fn test_no_variables_keep_intent() {
    let config = env(&[]);
    for intent in [ColorIntent::Auto, ColorIntent::Always, ColorIntent::Never] {
        assert_eq!(config.apply_color_config(intent), intent);
    }
}

#[test]
fn test_no_color_environment_variable() {
    let color = env(&[("NO_COLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Never);

    // empty NO_COLOR is ignored
    let color = env(&[("NO_COLOR", "")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Auto);
}

#[test]
fn test_force_color_environment_variable() {
    let color = env(&[("FORCE_COLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Always);

    let color = env(&[("FORCE_COLOR", "false")]).apply_color_config(ColorIntent::Always);
    assert_eq!(color, ColorIntent::Never);

    let color = env(&[("FORCE_COLOR", "maybe")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Auto);
}

#[test]
fn test_clicolor_zero_disables_color() {
    let color = env(&[("CLICOLOR", "0")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Never);

    let color = env(&[("CLICOLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Auto);
}

#[test]
fn test_environment_variable_precedence() {
    let config = env(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    // FORCE_COLOR wins over NO_COLOR and CLICOLOR
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
fn test_ci_environment_variable() {
    let config = env(&[("CI", "true"), ("FORCE_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_load_from_process_environment() {
    // only reads; the variables involved may or may not be set on the host
    let loaded = EnvironmentConfig::load().unwrap();
    assert_eq!(loaded.ci, std::env::var("CI").ok());
    assert_eq!(loaded.no_color, std::env::var("NO_COLOR").ok());
}
