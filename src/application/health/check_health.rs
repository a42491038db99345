use std::sync::Arc;

use crate::domain::health::{HealthFlags, HealthReport, HealthService};

/// Use case for the liveness endpoints
pub struct CheckHealthUseCase {
  health_service: Arc<HealthService>,
}

impl CheckHealthUseCase {
  pub fn new(health_service: Arc<HealthService>) -> Self {
    Self { health_service }
  }

  /// Without a flag only the server itself is reported
  pub async fn execute(&self, flags: Option<i64>) -> HealthReport {
    let flags = flags.map_or(HealthFlags::NONE, HealthFlags::from_bits);
    self.health_service.check(flags).await
  }
}
