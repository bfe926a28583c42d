use super::*;

#[test]
fn test_default_filter_targets_workspace_crates() {
    let filter = default_filter(LogLevel::Debug);
    assert!(filter.starts_with("affimatch=debug,affimatch_lib=debug"));
    assert!(filter.contains("rayon=warn"));
    assert!(filter.ends_with(",debug"));
}

#[test]
fn test_default_filter_parses() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        assert!(EnvFilter::try_new(default_filter(level)).is_ok());
    }
}

#[test]
fn test_logger_init_is_once_only() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        color: false,
    };

    // whether or not the first call wins, the second must refuse
    let first = Logger::init(config.clone());
    assert_eq!(first.is_ok(), Logger::is_initialized());
    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized) | Err(LoggerError::InitializationFailed { .. })
    ));
}
