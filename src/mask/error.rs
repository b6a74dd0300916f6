//! Error types for the mask engine.
//!
//! Only configuration mistakes and protocol misuse are errors. Typing into a
//! literal, bulk deletes and boundary backspaces are ordinary edit cases.

/// Errors raised by the mask engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The mask string cannot describe a template
    InvalidMask { mask: String, reason: &'static str },
    /// `take()` was called without a captured snapshot in this cycle
    NoSnapshot,
    /// The engine was handed a case it cannot resolve against the template
    InvariantViolation(String),
}

impl MaskError {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// True for errors caused by the caller breaking the edit-cycle protocol
    pub fn is_protocol_misuse(&self) -> bool {
        matches!(self, Self::NoSnapshot | Self::InvariantViolation(_))
    }
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMask { mask, reason } => write!(f, "invalid mask {:?}: {}", mask, reason),
            Self::NoSnapshot => write!(f, "no snapshot captured for this edit cycle"),
            Self::InvariantViolation(msg) => write!(f, "invariant violation: {}", msg),
        }
    }
}

impl std::error::Error for MaskError {}
