//! Known-signature table and selector resolution.
//!
//! A selector is the first four bytes of the keccak-256 hash of a function's
//! canonical signature. The built-in table derives its keys from the
//! signature text at construction, so the data asset is the list of
//! signatures itself and the selectors cannot drift out of sync. The table is
//! read-only after construction and injected by reference wherever lookups
//! happen, so tests can substitute alternates.

use indexmap::IndexMap;
use tiny_keccak::{Hasher, Keccak};

/// Description attached to selectors absent from the table. Not an error:
/// unknown selectors are a first-class, expected outcome.
pub const UNKNOWN_FUNCTION: &str = "Unknown function";

/// Ordered keyword rules for deriving a human-readable description from a
/// resolved signature. First match wins.
const DESCRIPTION_RULES: &[(&str, &str)] = &[
    ("upgrade", "Contract upgrade function"),
    ("admin", "Administrative function"),
    ("implementation", "Proxy implementation getter"),
    ("transfer", "Token transfer function"),
    ("approve", "Token approval function"),
    ("balance", "Balance query function"),
];

/// Computes the 4-byte selector of a canonical function signature, as a
/// lowercase `0x`-prefixed hex string.
pub fn selector_of(signature: &str) -> String {
    let mut keccak = Keccak::v256();
    keccak.update(signature.as_bytes());
    let mut hash = [0u8; 32];
    keccak.finalize(&mut hash);
    format!("0x{}", hex::encode(&hash[..4]))
}

/// Immutable map from 4-byte selectors to canonical signature strings.
///
/// Keys are lowercase, `0x`-prefixed, exactly ten characters. Insertion order
/// is preserved so iteration (and serialized dumps) are deterministic.
#[derive(Debug, Clone, Default)]
pub struct SignatureTable {
    entries: IndexMap<String, String>,
}

impl SignatureTable {
    /// Creates an empty table. Useful for tests that need full control over
    /// what counts as "known".
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: the proxy/upgrade administration surface plus the
    /// standard ERC-20 surface.
    pub fn known() -> Self {
        let mut table = Self::new();
        for signature in [
            "upgradeTo(address)",
            "upgradeToAndCall(address,bytes)",
            "changeAdmin(address)",
            "admin()",
            "implementation()",
            "isImplementation()",
            "name()",
            "symbol()",
            "decimals()",
            "totalSupply()",
            "balanceOf(address)",
            "transfer(address,uint256)",
            "transferFrom(address,address,uint256)",
            "approve(address,uint256)",
            "allowance(address,address)",
        ] {
            table.insert(signature);
        }
        // Beacon-style getter observed in the wild; resolves to the same
        // signature text as implementation().
        table.insert_alias("0xaaf10f42", "implementation()");
        table
    }

    /// Inserts a signature under its keccak-derived selector.
    pub fn insert(&mut self, signature: &str) {
        self.entries
            .insert(selector_of(signature), signature.to_string());
    }

    /// Inserts a signature under an explicit selector, for selectors whose
    /// canonical text differs from the hashed one (aliases) or for test
    /// fixtures. The selector is normalized to lowercase.
    pub fn insert_alias(&mut self, selector: &str, signature: &str) {
        self.entries
            .insert(selector.to_ascii_lowercase(), signature.to_string());
    }

    /// Looks up a selector, returning the canonical signature if known.
    /// Lookup keys are normalized to lowercase, so source casing is
    /// irrelevant.
    pub fn resolve(&self, selector: &str) -> Option<&str> {
        self.entries
            .get(&selector.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Number of known selectors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives a fixed description from a resolved signature via the ordered
/// keyword rules. Matching is case-insensitive so camelCase signatures like
/// `changeAdmin(address)` classify by intent. Total: anything unmatched is a
/// plain "Contract function".
pub fn describe(signature: &str) -> &'static str {
    let haystack = signature.to_ascii_lowercase();
    for (keyword, description) in DESCRIPTION_RULES {
        if haystack.contains(keyword) {
            return description;
        }
    }
    "Contract function"
}
