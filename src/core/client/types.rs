//! Outcome and failure types of a single validation

use std::fmt;

/// Answer for one SIREN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    /// Registered for intra-community VAT
    Valid,
    /// Known not to be registered
    Invalid,
    /// No definitive answer within the retry budget
    Undetermined,
}

impl ValidationStatus {
    /// Rendering used in the result table
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "True",
            Self::Invalid => "False",
            Self::Undetermined => "None",
        }
    }
}

impl From<Option<bool>> for ValidationStatus {
    fn from(validity: Option<bool>) -> Self {
        match validity {
            Some(true) => Self::Valid,
            Some(false) => Self::Invalid,
            None => Self::Undetermined,
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an outcome was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The endpoint gave an interpretable answer
    Answered,
    /// The identifier is not nine digits, nothing was sent
    InvalidFormat,
    /// Every attempt failed
    Exhausted,
}

/// Final result for one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub identifier: String,
    pub status: ValidationStatus,
    pub kind: OutcomeKind,
    /// Requests issued, the successful one included
    pub attempts: u32,
}

impl ValidationOutcome {
    pub fn answered(identifier: impl Into<String>, status: ValidationStatus, attempts: u32) -> Self {
        Self {
            identifier: identifier.into(),
            status,
            kind: OutcomeKind::Answered,
            attempts,
        }
    }

    pub fn invalid_format(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            status: ValidationStatus::Undetermined,
            kind: OutcomeKind::InvalidFormat,
            attempts: 0,
        }
    }

    pub fn exhausted(identifier: impl Into<String>, attempts: u32) -> Self {
        Self {
            identifier: identifier.into(),
            status: ValidationStatus::Undetermined,
            kind: OutcomeKind::Exhausted,
            attempts,
        }
    }

    /// Attempts beyond the first
    pub fn retries(&self) -> u32 {
        self.attempts.saturating_sub(1)
    }

    /// `siren;status` row of the result table
    pub fn csv_row(&self) -> String {
        format!("{};{}", self.identifier, self.status)
    }
}

/// Why an attempt did not produce an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// Non-200 status or a temporary error sentinel from the endpoint
    Transient,
    /// The proxy refused or could not be reached
    Proxy,
    /// Any other network failure, timeouts included
    Transport,
    /// Anything else, such as a body that is not JSON
    Unexpected,
}

impl FailureClass {
    /// Progress marker printed when this failure is retried
    pub fn marker(&self) -> Option<char> {
        match self {
            Self::Transient => Some('.'),
            Self::Proxy => Some('P'),
            Self::Transport => Some('R'),
            Self::Unexpected => None,
        }
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transient => "transient",
            Self::Proxy => "proxy",
            Self::Transport => "transport",
            Self::Unexpected => "unexpected",
        };
        f.write_str(name)
    }
}

/// A failed attempt, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub class: FailureClass,
    pub detail: String,
}

impl AttemptFailure {
    pub fn new(class: FailureClass, detail: impl Into<String>) -> Self {
        Self {
            class,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.class, self.detail)
    }
}
