//! Verification report types.

use fixture_generator::Provider;
use std::fmt;
use std::path::PathBuf;

/// A single property a fixture item or document failed to satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Identifier of the offending item, `None` for document-level problems.
    pub item_id: Option<String>,
    /// JSON key the violation concerns.
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn document(field: &str, message: impl Into<String>) -> Self {
        Self {
            item_id: None,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn item(item_id: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            item_id: Some(item_id.to_string()),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item_id {
            Some(id) => write!(f, "{id}.{}: {}", self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// Outcome of verifying one provider file.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    pub provider: Provider,
    pub path: PathBuf,
    pub items_checked: usize,
    pub available_items: usize,
    pub violations: Vec<Violation>,
}

impl VerificationReport {
    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }

    /// Share of items reported as available.
    pub fn availability_ratio(&self) -> f64 {
        if self.items_checked == 0 {
            0.0
        } else {
            self.available_items as f64 / self.items_checked as f64
        }
    }
}
