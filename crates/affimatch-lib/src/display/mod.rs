//! Terminal output for command results

pub mod status;
pub mod styling;

pub use status::StatusDisplay;
pub use styling::StyleManager;

#[cfg(test)]
mod tests {
    include!("display.test.rs");
}
