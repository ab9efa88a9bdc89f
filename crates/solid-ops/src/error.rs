use thiserror::Error;

/// Warning codes for recoverable input problems. Construction always continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    W001, // negative subdivision level, clamped to 0
    W002, // unknown subdivision type
    W003, // subdivision type fallback to CatmullClark
    W004, // lookup of a variable nothing declared or bound
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::W001 => "W001",
            Self::W002 => "W002",
            Self::W003 => "W003",
            Self::W004 => "W004",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
}

impl Warning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

// ─────────────────────────────────────────────────────────────────────────────

/// Hard failures. Only the keyword entry point can fail; building from an
/// `OperationKind` never does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
}
