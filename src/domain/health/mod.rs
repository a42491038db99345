pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{HealthFlags, HealthReport, HealthStatus};
pub use ports::HealthRepository;
pub use services::HealthService;
