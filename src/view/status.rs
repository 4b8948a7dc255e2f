use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

/// Outcome line shown after a user-triggered operation.
///
/// Exactly one of the success or failure indicators is set, replacing whatever the
/// previous operation reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            text: "ok.".to_string(),
        }
    }

    pub fn failure(error: &dyn fmt::Display) -> Self {
        Self {
            kind: StatusKind::Failure,
            text: error.to_string(),
        }
    }

    /// The failure boundary: any error becomes a failure message with its text verbatim.
    pub fn from_result<T, E: fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => Self::failure(e),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
