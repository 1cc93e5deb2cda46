pub mod fixtures;
pub mod test_env;

// Re-export key testing utilities
pub use fixtures::{editor_edge, editor_node, pipeline_payload, prompt_pipeline};
pub use test_env::TestServer;
