use serde::{Serialize, Serializer};

/// Outcome of a single health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
  NotChecked,
  Error,
  Ok,
}

impl HealthStatus {
  /// Wire representation: -1 not checked, 0 error, 1 ok
  pub fn code(self) -> i8 {
    match self {
      HealthStatus::NotChecked => -1,
      HealthStatus::Error => 0,
      HealthStatus::Ok => 1,
    }
  }
}

impl Serialize for HealthStatus {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i8(self.code())
  }
}

/// Bitmask selecting which components to probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthFlags(i64);

impl HealthFlags {
  pub const NONE: HealthFlags = HealthFlags(0);
  pub const DATABASE: HealthFlags = HealthFlags(0b01);
  pub const ALL: HealthFlags = HealthFlags(0b11);

  pub fn from_bits(bits: i64) -> Self {
    Self(bits)
  }

  pub fn bits(self) -> i64 {
    self.0
  }

  pub fn contains(self, other: HealthFlags) -> bool {
    other.0 != 0 && self.0 & other.0 == other.0
  }
}

impl Default for HealthFlags {
  fn default() -> Self {
    HealthFlags::ALL
  }
}

/// Aggregated health of the server and its dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
  pub server_status: HealthStatus,
  pub database_status: HealthStatus,
}

impl Default for HealthReport {
  fn default() -> Self {
    Self {
      server_status: HealthStatus::Ok,
      database_status: HealthStatus::NotChecked,
    }
  }
}
