use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An error as it is reported to a user: a short title and the full message, including the text of
/// the underlying error.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn new<S1, S2>(summary: S1, detail: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.summary, self.detail)
    }
}
