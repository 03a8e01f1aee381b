// Adaptive time-series trend engine for dashboard metric widgets
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::trend_service::TrendService;
pub use domain::sample::{Bucket, Sample, Series};
pub use domain::trend::{
    Granularity, Polarity, ResolvedGranularity, Sparsity, SummaryMode, TrendOptions, TrendResult,
};
