pub mod fixtures;
pub mod test_env;

// Re-export key testing utilities
pub use fixtures::{config_path, feed_path, load_feed, product_id};
pub use test_env::TestEnvironment;
