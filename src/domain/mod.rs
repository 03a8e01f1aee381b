// Domain layer - Plain data shared by the engine and its callers
pub mod dashboard;
pub mod sample;
pub mod trend;
