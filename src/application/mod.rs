// Application layer - The trend engine and the use cases built on it
pub mod bucketer;
pub mod calendar;
pub mod comparator;
pub mod dashboard_service;
pub mod granularity;
pub mod quality;
pub mod summarizer;
pub mod trend_service;
