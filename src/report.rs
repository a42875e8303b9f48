use std::fmt::{self, Display};

use crate::param::InvalidValue;

/// A rejected request that did not abort the surrounding operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// The cast is not offered by the engine.
    UnknownCast {
        /// The requested cast.
        cast: String,
        /// The casts the engine offers.
        available: Vec<String>,
    },
    /// The name is neither a talk parameter nor one of its labels.
    UnknownParam {
        /// The requested name.
        name: String,
        /// The names that would have been accepted.
        accepted: Vec<String>,
    },
    /// The current cast has no such emotion.
    UnknownEmotion {
        /// The requested emotion.
        name: String,
        /// The emotions of the current cast.
        accepted: Vec<String>,
    },
    /// The value for the named parameter or emotion is not an integer in [0, 100].
    InvalidValue {
        /// The parameter or emotion name.
        name: String,
        /// The rejected value.
        error: InvalidValue,
    },
    /// A configuration entry names a parameter but has no value for it.
    MissingValue {
        /// The parameter name.
        name: String,
    },
    /// A whole section of a configuration could not be applied.
    SectionFailed {
        /// The section name.
        section: &'static str,
        /// Why it failed.
        reason: String,
    },
}

impl Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCast {
                cast,
                available,
            } => write!(
                f,
                "cast {cast} is not included in the list; select from [{}]",
                available.join(",")
            ),
            Self::UnknownParam {
                name,
                accepted,
            } => write!(
                f,
                "condition {name} is not included in the list; select from [{}]",
                accepted.join(",")
            ),
            Self::UnknownEmotion {
                name,
                accepted,
            } => write!(
                f,
                "emotion {name} is not included in the list; select from [{}]",
                accepted.join(",")
            ),
            Self::InvalidValue {
                name,
                error,
            } => write!(f, "{name}: {error}"),
            Self::MissingValue {
                name,
            } => write!(f, "condition {name} has no value"),
            Self::SectionFailed {
                section,
                reason,
            } => write!(f, "{section} section was not applied: {reason}"),
        }
    }
}

/// The outcome of an operation that may reject parts of its input without failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<T> {
    /// The result of the accepted part.
    pub value: T,
    /// What was rejected, in order.
    pub warnings: Vec<Warning>,
}

impl<T> Report<T> {
    /// Creates a report without warnings.
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Creates a report holding a single warning, which is also logged.
    pub fn rejected(value: T, warning: Warning) -> Self {
        let mut report = Self::new(value);
        report.warn(warning);
        report
    }

    /// Records and logs a warning.
    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Checks whether nothing was rejected.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Moves the warnings of `other` into this report and returns the value of `other`.
    pub fn absorb<U>(&mut self, other: Report<U>) -> U {
        self.warnings.extend(other.warnings);
        other.value
    }
}
