//! Accumulated validation.
//!
//! [`ValidationCollector`] gathers every failed check on a query or
//! configuration so the caller sees all problems at once.

use crate::error::EstimateError;

/// Accumulates validation errors and converts them into a single
/// [`EstimateError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Record `msg` when `ok` is false.
    pub(crate) fn check(&mut self, ok: bool, msg: impl FnOnce() -> String) {
        if !ok {
            self.push(msg());
        }
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), EstimateError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(EstimateError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_finishes_ok() {
        assert!(ValidationCollector::new().finish().is_ok());
    }

    #[test]
    fn check_records_only_failures() {
        let mut c = ValidationCollector::new();
        c.check(true, || "never".to_string());
        c.check(false, || "first".to_string());
        c.check(false, || "second".to_string());
        assert_eq!(c.len(), 2);

        let err = c.finish().unwrap_err();
        assert_eq!(
            err,
            EstimateError::Validation {
                count: 2,
                details: "first; second".to_string(),
            }
        );
    }
}
