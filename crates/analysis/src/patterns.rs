//! Structural contract-pattern detection.
//!
//! Each rule is an independent heuristic over the raw input text (substring
//! containment on canonical mnemonic spellings, case-sensitive) or over the
//! extracted selector set. A sample may trigger zero, one, or many rules.
//! Rules are evaluated in a fixed order so output is deterministic.

use opsight_core::Opcode;
use opsight_core::signatures::selector_of;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed vocabulary of detectable contract patterns.
///
/// Serialized forms are the exact labels the display layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractPattern {
    /// Calls are forwarded via DELEGATECALL to an implementation contract.
    #[serde(rename = "Proxy Pattern")]
    Proxy,
    /// Contract writes to storage.
    #[serde(rename = "State Modification")]
    StateModification,
    /// Contract can destroy itself.
    #[serde(rename = "Self Destruct")]
    SelfDestruct,
    /// Contract deploys other contracts with CREATE2.
    #[serde(rename = "Contract Creation")]
    ContractCreation,
    /// Exposes the canonical upgradeTo entry point.
    #[serde(rename = "Upgradeable Contract")]
    Upgradeable,
    /// Exposes the canonical ERC-20 transfer entry point.
    #[serde(rename = "ERC-20 Token")]
    Erc20Token,
}

impl fmt::Display for ContractPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContractPattern::Proxy => "Proxy Pattern",
            ContractPattern::StateModification => "State Modification",
            ContractPattern::SelfDestruct => "Self Destruct",
            ContractPattern::ContractCreation => "Contract Creation",
            ContractPattern::Upgradeable => "Upgradeable Contract",
            ContractPattern::Erc20Token => "ERC-20 Token",
        };
        write!(f, "{}", label)
    }
}

/// Signatures whose selectors mark a contract as proxy-related even when no
/// DELEGATECALL appears in the scanned text.
const PROXY_SIGNATURES: &[&str] = &[
    "upgradeTo(address)",
    "upgradeToAndCall(address,bytes)",
    "implementation()",
];

/// Runs every detection rule over the raw text and the extracted selector
/// set, in rule order. The result is duplicate-free by construction.
pub fn detect_patterns(text: &str, selectors: &[String]) -> Vec<ContractPattern> {
    let mut patterns = Vec::new();

    if contains_mnemonic(text, Opcode::DELEGATECALL) {
        patterns.push(ContractPattern::Proxy);
    }
    if contains_mnemonic(text, Opcode::SSTORE) {
        patterns.push(ContractPattern::StateModification);
    }
    if contains_mnemonic(text, Opcode::SELFDESTRUCT) {
        patterns.push(ContractPattern::SelfDestruct);
    }
    if contains_mnemonic(text, Opcode::CREATE2) {
        patterns.push(ContractPattern::ContractCreation);
    }
    if has_selector(selectors, "upgradeTo(address)") {
        patterns.push(ContractPattern::Upgradeable);
    }
    if has_selector(selectors, "transfer(address,uint256)") {
        patterns.push(ContractPattern::Erc20Token);
    }

    tracing::debug!("detected {} patterns: {:?}", patterns.len(), patterns);
    patterns
}

/// Heuristic constructor check: deployment code copies the runtime into
/// memory with CODECOPY before returning it. Presence of the mnemonic is an
/// approximation, not proof of a Solidity constructor.
pub fn has_constructor(text: &str) -> bool {
    contains_mnemonic(text, Opcode::CODECOPY)
}

/// A contract is considered a proxy when forwarding was observed directly or
/// when its dispatcher exposes any of the canonical proxy-administration
/// selectors.
pub fn is_proxy(patterns: &[ContractPattern], selectors: &[String]) -> bool {
    patterns.contains(&ContractPattern::Proxy)
        || PROXY_SIGNATURES
            .iter()
            .any(|signature| has_selector(selectors, signature))
}

fn contains_mnemonic(text: &str, opcode: Opcode) -> bool {
    text.contains(&opcode.to_string())
}

fn has_selector(selectors: &[String], signature: &str) -> bool {
    let wanted = selector_of(signature);
    selectors.iter().any(|s| *s == wanted)
}
