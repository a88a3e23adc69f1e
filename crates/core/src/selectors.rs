//! Candidate function-selector extraction.
//!
//! Solidity dispatchers compare the first four bytes of calldata against
//! 4-byte immediates pushed with `PUSH4`. Scanning raw text for that idiom
//! recovers the selector set without disassembling anything. This is a
//! heuristic: a `PUSH4`-shaped literal embedded in a data section or comment
//! is counted too. A stricter build would match only within genuine
//! instruction positions.

use crate::Opcode;
use indexmap::IndexSet;

/// Hex-literal width of a 4-byte selector, excluding the `0x` prefix.
const SELECTOR_HEX_DIGITS: usize = 8;

/// Scans raw input text for `PUSH4` immediates and collects candidate
/// selectors.
///
/// A candidate is the canonical `PUSH4` spelling followed (across whitespace)
/// by `0x` and exactly eight hex digits. Matches are normalized to lowercase
/// and deduplicated preserving first-seen order, so repeated dispatcher
/// comparisons of the same selector yield one entry at its first position.
///
/// An empty result is a normal outcome (constructor-only code, libraries),
/// never an error.
pub fn extract_selectors(text: &str) -> Vec<String> {
    let needle = Opcode::PUSH(4).to_string();
    let mut seen: IndexSet<String> = IndexSet::new();

    for (idx, _) in text.match_indices(&needle) {
        // Reject matches inside a longer word on either side.
        if text[..idx]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric())
        {
            continue;
        }
        let rest = &text[idx + needle.len()..];
        if let Some(selector) = parse_selector_literal(rest) {
            if seen.insert(selector.clone()) {
                tracing::debug!("selector candidate {} at byte offset {}", selector, idx);
            }
        }
    }

    seen.into_iter().collect()
}

/// Parses `<ws>+ 0x<8 hex digits>` at the start of `rest`, returning the
/// lowercase `0x`-prefixed selector.
fn parse_selector_literal(rest: &str) -> Option<String> {
    let trimmed = rest.trim_start();
    // Immediate must be separated from the mnemonic.
    if trimmed.len() == rest.len() {
        return None;
    }

    let digits = trimmed.strip_prefix("0x")?;
    if digits.len() < SELECTOR_HEX_DIGITS {
        return None;
    }
    let (literal, tail) = digits.split_at(SELECTOR_HEX_DIGITS);
    if !literal.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // Exactly four bytes: a longer literal is not a selector.
    if tail.chars().next().is_some_and(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(format!("0x{}", literal.to_ascii_lowercase()))
}
