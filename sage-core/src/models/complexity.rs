use std::fmt;

use serde::{Deserialize, Serialize};

/// Complexity class assigned to a query by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

/// Control-flow branch a query is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Research only.
    Simple,
    /// Research then analysis.
    Complex,
}

impl Complexity {
    /// Only `Simple` takes the research-only branch.
    pub fn flow(self) -> Flow {
        match self {
            Complexity::Simple => Flow::Simple,
            Complexity::Moderate | Complexity::Complex => Flow::Complex,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

impl Flow {
    pub fn as_str(self) -> &'static str {
        match self {
            Flow::Simple => "simple",
            Flow::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
