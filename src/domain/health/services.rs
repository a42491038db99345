use std::sync::Arc;

use super::entities::{HealthFlags, HealthReport, HealthStatus};
use super::ports::HealthRepository;

pub struct HealthService {
  health_repo: Arc<dyn HealthRepository>,
}

impl HealthService {
  pub fn new(health_repo: Arc<dyn HealthRepository>) -> Self {
    Self { health_repo }
  }

  /// Runs the probes selected by `flags`
  ///
  /// A failing probe is reported in the result, never as an error.
  pub async fn check(&self, flags: HealthFlags) -> HealthReport {
    let mut report = HealthReport::default();

    if flags.contains(HealthFlags::DATABASE) {
      report.database_status = match self.health_repo.ping_database().await {
        Ok(()) => HealthStatus::Ok,
        Err(e) => {
          tracing::warn!(error = %e, "Database health check failed");
          HealthStatus::Error
        }
      };
    }

    report
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::InMemoryHealthRepository;

  #[tokio::test]
  async fn test_database_is_only_probed_when_requested() {
    let service = HealthService::new(Arc::new(InMemoryHealthRepository::new(true)));

    let report = service.check(HealthFlags::NONE).await;
    assert_eq!(report.database_status, HealthStatus::NotChecked);
    assert_eq!(report.server_status, HealthStatus::Ok);

    let report = service.check(HealthFlags::DATABASE).await;
    assert_eq!(report.database_status, HealthStatus::Ok);
  }

  #[tokio::test]
  async fn test_unreachable_database_reports_error() {
    let service = HealthService::new(Arc::new(InMemoryHealthRepository::new(false)));

    let report = service.check(HealthFlags::ALL).await;
    assert_eq!(report.database_status, HealthStatus::Error);
    assert_eq!(report.server_status, HealthStatus::Ok);
  }
}
