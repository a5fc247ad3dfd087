//! Field-level validation for request bodies.

use std::fmt;

use serde::Serialize;

/// Maximum length, in characters, of every name column.
pub const MAX_NAME_LEN: usize = 50;

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   String,
  pub message: String,
}

/// Every field that failed validation, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
  pub fn single(field: &str, message: impl Into<String>) -> Self {
    let mut errors = Self::default();
    errors.push(field, message);
    errors
  }

  pub fn push(&mut self, field: &str, message: impl Into<String>) {
    self.0.push(FieldError {
      field:   field.to_owned(),
      message: message.into(),
    });
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = &FieldError> { self.0.iter() }

  pub fn into_result(self) -> Result<(), Self> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for e in &self.0 {
      if !first {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", e.field, e.message)?;
      first = false;
    }
    Ok(())
  }
}

/// Required, non-blank, at most [`MAX_NAME_LEN`] characters.
pub(crate) fn name(errors: &mut ValidationErrors, field: &str, value: &str) {
  if value.trim().is_empty() {
    errors.push(field, "must not be blank");
  } else if value.chars().count() > MAX_NAME_LEN {
    errors.push(field, format!("must be at most {MAX_NAME_LEN} characters"));
  }
}
