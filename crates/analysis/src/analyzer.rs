//! Report assembly: the single public entry point of the analyzer.
//!
//! `analyze` wires the stages strictly tokenizer → selector extractor →
//! classifier → report and either returns a complete, internally consistent
//! `BytecodeAnalysis` or an error. There is no partial result. Every call is
//! independent and reentrant: nothing outside the call frame is read except
//! the injected read-only signature table, so concurrent analyses need no
//! locking.

use crate::complexity::Complexity;
use crate::patterns::{self, ContractPattern};
use opsight_core::signatures::{SignatureTable, UNKNOWN_FUNCTION, describe};
use opsight_core::{selectors, tokenizer};
use opsight_utils::errors::AnalyzeError;
use serde::{Deserialize, Serialize};

/// Bounds on a single analysis call.
///
/// The source of the input is pasted, attacker-controllable text; the cap
/// keeps scan cost proportional to something a human plausibly pasted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum accepted input length in bytes. Longer input is rejected with
    /// `AnalyzeError::SizeLimitExceeded` before any scanning happens.
    pub max_input_bytes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 1024 * 1024,
        }
    }
}

/// One extracted selector with its resolution against the signature table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSelector {
    /// Lowercase `0x`-prefixed 4-byte selector as found in the input.
    pub selector: String,
    /// Canonical signature if the selector is known, `None` otherwise.
    pub signature: Option<String>,
    /// Keyword-derived description; "Unknown function" for unknown selectors.
    pub description: String,
}

/// Complete analysis report for one input.
///
/// Created fresh per call and never mutated afterwards. Field names
/// serialize camelCase for the display layer consuming the JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BytecodeAnalysis {
    /// Count of non-empty input lines after tokenization.
    pub total_opcodes: usize,
    /// Extracted selectors in first-seen order, at most one entry per
    /// distinct selector value.
    pub function_selectors: Vec<FunctionSelector>,
    /// True iff the Proxy Pattern was detected or a proxy-administration
    /// selector is present.
    pub is_proxy: bool,
    /// Heuristic: the input contains the code-copy mnemonic.
    pub has_constructor: bool,
    /// Pure function of `total_opcodes`.
    pub complexity: Complexity,
    /// Detected structural patterns, in rule-evaluation order.
    pub patterns: Vec<ContractPattern>,
}

/// Runs the full pipeline over one input string.
///
/// Deterministic and total over in-bounds input: the same string always
/// yields the same report, and "nothing found" is a successful, empty-ish
/// report rather than an error.
pub fn analyze(
    input: &str,
    table: &SignatureTable,
    config: &AnalyzerConfig,
) -> Result<BytecodeAnalysis, AnalyzeError> {
    if input.len() > config.max_input_bytes {
        return Err(AnalyzeError::SizeLimitExceeded {
            len: input.len(),
            limit: config.max_input_bytes,
        });
    }

    let tokens = tokenizer::tokenize(input);
    let total_opcodes = tokens.len();

    let extracted = selectors::extract_selectors(input);
    let function_selectors = extracted
        .iter()
        .map(|selector| resolve_selector(selector, table))
        .collect();

    let patterns = patterns::detect_patterns(input, &extracted);
    let is_proxy = patterns::is_proxy(&patterns, &extracted);
    let has_constructor = patterns::has_constructor(input);
    let complexity = Complexity::from_opcode_count(total_opcodes);

    tracing::debug!(
        total_opcodes,
        selector_count = extracted.len(),
        is_proxy,
        has_constructor,
        "analysis complete"
    );

    Ok(BytecodeAnalysis {
        total_opcodes,
        function_selectors,
        is_proxy,
        has_constructor,
        complexity,
        patterns,
    })
}

/// Convenience wrapper over [`analyze`] with the built-in signature table and
/// default bounds.
pub fn analyze_bytecode(input: &str) -> Result<BytecodeAnalysis, AnalyzeError> {
    analyze(input, &SignatureTable::known(), &AnalyzerConfig::default())
}

/// Resolution is pure and total: unknown selectors are an expected output,
/// not an error condition.
fn resolve_selector(selector: &str, table: &SignatureTable) -> FunctionSelector {
    match table.resolve(selector) {
        Some(signature) => FunctionSelector {
            selector: selector.to_string(),
            signature: Some(signature.to_string()),
            description: describe(signature).to_string(),
        },
        None => FunctionSelector {
            selector: selector.to_string(),
            signature: None,
            description: UNKNOWN_FUNCTION.to_string(),
        },
    }
}
