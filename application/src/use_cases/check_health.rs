//! Check Health use case.
//!
//! Asks the analysis service whether its dataset is loaded.

use crate::ports::analysis_gateway::{AnalysisGateway, GatewayError, HealthReport};
use std::sync::Arc;
use tracing::{info, warn};

pub struct CheckHealthUseCase {
    gateway: Arc<dyn AnalysisGateway>,
}

impl CheckHealthUseCase {
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> Result<HealthReport, GatewayError> {
        match self.gateway.health().await {
            Ok(report) => {
                info!(
                    "Health: status={}, data_loaded={}, records={}",
                    report.status, report.data_loaded, report.total_records
                );
                Ok(report)
            }
            Err(e) => {
                warn!("Health check failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use estate_domain::{Query, RawPayload};

    struct StaticGateway(Option<HealthReport>);

    #[async_trait]
    impl AnalysisGateway for StaticGateway {
        async fn analyze(&self, _query: &Query) -> Result<RawPayload, GatewayError> {
            Err(GatewayError::Connection("unused".into()))
        }

        async fn health(&self) -> Result<HealthReport, GatewayError> {
            self.0
                .clone()
                .ok_or_else(|| GatewayError::Connection("refused".into()))
        }

        fn endpoint(&self) -> &str {
            "http://static/api/analyze/"
        }
    }

    #[tokio::test]
    async fn test_reports_healthy_service() {
        let report = HealthReport {
            status: "ok".into(),
            data_loaded: true,
            total_records: 12,
            ..Default::default()
        };
        let uc = CheckHealthUseCase::new(Arc::new(StaticGateway(Some(report.clone()))));
        assert_eq!(uc.execute().await.unwrap(), report);
    }

    #[tokio::test]
    async fn test_propagates_gateway_error() {
        let uc = CheckHealthUseCase::new(Arc::new(StaticGateway(None)));
        assert!(matches!(
            uc.execute().await,
            Err(GatewayError::Connection(_))
        ));
    }
}
