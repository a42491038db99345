use serde::Serialize;

/// A clamped page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
  pub page: i64,
  pub page_size: i64,
}

impl Pagination {
  pub const DEFAULT_PAGE: i64 = 1;
  pub const DEFAULT_PAGE_SIZE: i64 = 10;
  pub const MAX_PAGE_SIZE: i64 = 100;

  /// Builds a page request, replacing out-of-range values
  ///
  /// Pages below 1 become page 1, page sizes below 1 become the default and
  /// page sizes above the maximum are clamped to it.
  pub fn new(page: i64, page_size: i64) -> Self {
    let page = if page <= 0 { Self::DEFAULT_PAGE } else { page };
    let page_size = if page_size <= 0 {
      Self::DEFAULT_PAGE_SIZE
    } else {
      page_size.min(Self::MAX_PAGE_SIZE)
    };

    Self { page, page_size }
  }

  pub fn offset(&self) -> i64 {
    (self.page - 1).saturating_mul(self.page_size)
  }

  pub fn limit(&self) -> i64 {
    self.page_size
  }
}

impl Default for Pagination {
  fn default() -> Self {
    Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_PAGE_SIZE)
  }
}
