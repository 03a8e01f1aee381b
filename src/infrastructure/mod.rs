// Infrastructure layer - Configuration and process-level adapters
pub mod config;
