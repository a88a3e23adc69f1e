//! Line-oriented tokenizer for pasted EVM assembly text.
//!
//! The analyzer accepts whatever a user pastes into it: disassembler output,
//! hand-written mnemonics, or junk. Tokenization is therefore deliberately
//! permissive. Every non-empty line becomes one token; no grammar is enforced
//! and nothing is rejected. Downstream stages match on substrings rather than
//! requiring a well-formed instruction stream.

use crate::Opcode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single parsed unit of the input.
///
/// Immutable once created: built during tokenization, consumed by the
/// detection stages, discarded when the report is assembled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionToken {
    /// Mnemonic field, canonicalized to upper-case (e.g. "PUSH1", "ADD").
    /// May be an arbitrary word if the line is not real assembly.
    pub mnemonic: String,
    /// Immediate operand as written (e.g. "0x3659cfe6"), if present.
    pub operand: Option<String>,
}

impl InstructionToken {
    /// Resolves the mnemonic against the known opcode vocabulary.
    ///
    /// Returns `None` for lines that are not recognizable EVM instructions;
    /// such tokens still count toward the opcode total.
    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_str(&self.mnemonic).ok()
    }
}

impl fmt::Display for InstructionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operand) = &self.operand {
            write!(f, "{:<8} {}", self.mnemonic, operand)
        } else {
            write!(f, "{}", self.mnemonic)
        }
    }
}

/// Splits input text into an ordered token sequence.
///
/// One instruction per line; lines are trimmed and blank lines dropped. The
/// first whitespace-separated field is the mnemonic (upper-cased), the second,
/// if any, is the operand. Extra fields are ignored. Never fails: malformed
/// input yields opaque tokens, not errors.
///
/// The token count of the result is the report's `totalOpcodes`.
pub fn tokenize(text: &str) -> Vec<InstructionToken> {
    let mut tokens = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        // Non-empty trimmed line always has a first field.
        let mnemonic = parts.next().unwrap_or(line).to_ascii_uppercase();
        let operand = parts.next().map(str::to_string);

        tokens.push(InstructionToken { mnemonic, operand });
    }

    let unrecognized = tokens.iter().filter(|t| t.opcode().is_none()).count();
    tracing::debug!(
        "tokenized {} instructions ({} with unrecognized mnemonics)",
        tokens.len(),
        unrecognized
    );
    tokens
}
