// Dashboard service - Use case for evaluating every widget on a page
use crate::application::trend_service::TrendService;
use crate::domain::dashboard::{WidgetTrend, WidgetTrendRequest};
use crate::domain::sample::Sample;
use crate::domain::trend::{PartialTrendOptions, TrendOptions, TrendResult};
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("batch of {count} widgets exceeds the limit of {max}")]
    BatchTooLarge { count: usize, max: usize },

    #[error("widget evaluation failed: {0}")]
    Worker(#[from] JoinError),
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    trend_service: TrendService,
    defaults: TrendOptions,
    max_widgets: usize,
}

impl DashboardService {
    pub fn new(trend_service: TrendService, defaults: TrendOptions, max_widgets: usize) -> Self {
        Self {
            trend_service,
            defaults,
            max_widgets,
        }
    }

    /// Evaluate a single metric, filling unset options from the configured defaults
    pub fn evaluate(
        &self,
        current: &[Sample],
        previous: Option<&[Sample]>,
        options: PartialTrendOptions,
    ) -> TrendResult {
        let options = options.resolve(&self.defaults);
        self.trend_service.evaluate(current, previous, &options)
    }

    /// Evaluate a batch of widgets in parallel on the blocking pool.
    /// Results come back in request order.
    pub async fn evaluate_widgets(
        &self,
        widgets: Vec<WidgetTrendRequest>,
    ) -> Result<Vec<WidgetTrend>, DashboardError> {
        if widgets.len() > self.max_widgets {
            return Err(DashboardError::BatchTooLarge {
                count: widgets.len(),
                max: self.max_widgets,
            });
        }

        tracing::info!("Evaluating {} widget trends", widgets.len());

        let handles: Vec<_> = widgets
            .into_iter()
            .map(|widget| {
                let service = self.clone();
                tokio::task::spawn_blocking(move || {
                    let WidgetTrendRequest {
                        id,
                        current,
                        previous,
                        options,
                    } = widget;
                    let result = service.evaluate(&current, previous.as_deref(), options);
                    WidgetTrend::new(id, result)
                })
            })
            .collect();

        let mut trends = Vec::with_capacity(handles.len());
        for handle in handles {
            trends.push(handle.await?);
        }

        Ok(trends)
    }
}
