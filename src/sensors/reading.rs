//! # Sensor reading value type.
//!
//! [`Reading`] is the unit of data flowing through a stream: the subject that
//! was queried plus the quantity measured for it. Readings are immutable;
//! a source produces a fresh one per successful pull and ownership moves
//! source → subscription → consumer without copies.

use std::fmt;
use std::sync::Arc;

/// One measured value produced by a [`Source`](crate::Source).
///
/// A reading is created once and never mutated. The subject is stored as
/// `Arc<str>` so cloning a reading (for example into a test channel) stays
/// cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    subject: Arc<str>,
    value: i32,
}

impl Reading {
    /// Creates a reading for `subject` carrying the measured `value`.
    ///
    /// # Example
    /// ```
    /// use pullstream::Reading;
    ///
    /// let r = Reading::new("seoul", 21);
    /// assert_eq!(r.subject(), "seoul");
    /// assert_eq!(r.value(), 21);
    /// ```
    pub fn new(subject: impl Into<Arc<str>>, value: i32) -> Self {
        Self {
            subject: subject.into(),
            value,
        }
    }

    /// Returns the subject this reading was measured for.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the measured quantity.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl fmt::Display for Reading {
    /// Formats as `subject=value`.
    ///
    /// # Example
    /// ```
    /// use pullstream::Reading;
    ///
    /// assert_eq!(Reading::new("seoul", 21).to_string(), "seoul=21");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.subject, self.value)
    }
}
