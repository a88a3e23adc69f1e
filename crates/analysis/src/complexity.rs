//! Opcode-count complexity classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse complexity class derived from the opcode total alone.
///
/// The 500/1000 thresholds are inherited heuristics with no derivation
/// behind them; they are kept verbatim for output compatibility and should
/// not be assumed to generalize to arbitrary real-world bytecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Pure function of the token count: > 1000 is High, > 500 is Medium,
    /// otherwise Low. Exactly 500 is Low; exactly 1000 is Medium.
    pub const fn from_opcode_count(total_opcodes: usize) -> Self {
        if total_opcodes > 1000 {
            Self::High
        } else if total_opcodes > 500 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}
