//! [`PageRequest`]: selects one slice of the user table.

/// Page size used when the caller supplies none (or zero).
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upper bound on a single page.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// A zero-based page number and a page size of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  page: u32,
  size: u32,
}

impl PageRequest {
  /// Build a request, substituting [`DEFAULT_PAGE_SIZE`] for a zero size and
  /// clamping to [`MAX_PAGE_SIZE`].
  pub fn new(page: u32, size: u32) -> Self {
    let size = match size {
      0 => DEFAULT_PAGE_SIZE,
      s => s.min(MAX_PAGE_SIZE),
    };
    Self { page, size }
  }

  pub fn page(&self) -> u32 { self.page }

  pub fn size(&self) -> u32 { self.size }

  /// Rows to skip before this page starts.
  pub fn offset(&self) -> u64 { u64::from(self.page) * u64::from(self.size) }
}

impl Default for PageRequest {
  fn default() -> Self { Self::new(0, DEFAULT_PAGE_SIZE) }
}
