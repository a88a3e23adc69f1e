use crate::init_tracing;
use opsight_analysis::{
    AnalyzerConfig, Complexity, ContractPattern, analyze, analyze_bytecode,
};
use opsight_core::signatures::SignatureTable;
use opsight_utils::errors::AnalyzeError;

/// Minimal UUPS-style dispatcher fragment: two selector comparisons, no
/// delegate-call, self-destruct, create2, or code-copy mnemonics.
const UUPS_DISPATCHER: &str = "\
PUSH1 0x80
PUSH1 0x40
MSTORE
CALLDATALOAD
PUSH1 0xe0
SHR
DUP1
PUSH4 0x3659cfe6
EQ
PUSH2 0x004b
JUMPI
DUP1
PUSH4 0x4f1ef286
EQ
PUSH2 0x0060
JUMPI
";

#[test]
fn test_analysis_is_deterministic() {
    init_tracing();
    let first = analyze_bytecode(UUPS_DISPATCHER).unwrap();
    let second = analyze_bytecode(UUPS_DISPATCHER).unwrap();
    assert_eq!(first, second, "same input must yield identical reports");
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "serialized reports must be byte-for-byte identical"
    );
}

#[test]
fn test_end_to_end_uups_dispatcher() {
    init_tracing();
    let report = analyze_bytecode(UUPS_DISPATCHER).unwrap();

    assert_eq!(report.function_selectors.len(), 2);
    assert_eq!(report.function_selectors[0].selector, "0x3659cfe6");
    assert_eq!(
        report.function_selectors[0].signature.as_deref(),
        Some("upgradeTo(address)")
    );
    assert_eq!(
        report.function_selectors[0].description,
        "Contract upgrade function"
    );
    assert_eq!(report.function_selectors[1].selector, "0x4f1ef286");
    assert_eq!(
        report.function_selectors[1].signature.as_deref(),
        Some("upgradeToAndCall(address,bytes)")
    );
    assert_eq!(report.patterns, vec![ContractPattern::Upgradeable]);
    assert!(report.is_proxy);
    assert!(!report.has_constructor);
    assert_eq!(report.complexity, Complexity::Low);
}

#[test]
fn test_duplicate_selector_keeps_first_position() {
    init_tracing();
    let asm = "\
PUSH4 0x4f1ef286
EQ
PUSH4 0x3659cfe6
EQ
PUSH4 0x4f1ef286
EQ
";
    let report = analyze_bytecode(asm).unwrap();
    assert_eq!(report.function_selectors.len(), 2);
    assert_eq!(report.function_selectors[0].selector, "0x4f1ef286");
    assert_eq!(report.function_selectors[1].selector, "0x3659cfe6");
}

#[test]
fn test_mixed_case_selector_resolves_like_lowercase() {
    init_tracing();
    let upper = analyze_bytecode("PUSH4 0x3659CFE6").unwrap();
    let lower = analyze_bytecode("PUSH4 0x3659cfe6").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(
        upper.function_selectors[0].signature.as_deref(),
        Some("upgradeTo(address)")
    );
}

#[test]
fn test_complexity_boundaries() {
    init_tracing();
    for (lines, expected) in [
        (500, Complexity::Low),
        (501, Complexity::Medium),
        (1000, Complexity::Medium),
        (1001, Complexity::High),
    ] {
        let input = "JUMPDEST\n".repeat(lines);
        let report = analyze_bytecode(&input).unwrap();
        assert_eq!(report.total_opcodes, lines);
        assert_eq!(
            report.complexity, expected,
            "{lines} opcodes should classify as {expected:?}"
        );
    }
}

#[test]
fn test_proxy_via_selector_without_delegatecall() {
    init_tracing();
    let report = analyze_bytecode("PUSH4 0x3659cfe6\nEQ").unwrap();
    assert!(report.is_proxy, "upgradeTo selector alone implies proxy");
    assert!(report.patterns.contains(&ContractPattern::Upgradeable));
    assert!(
        !report.patterns.contains(&ContractPattern::Proxy),
        "Proxy Pattern label requires the delegate-call mnemonic"
    );
}

#[test]
fn test_proxy_via_delegatecall_without_selectors() {
    init_tracing();
    let report = analyze_bytecode("PUSH1 0x40\nDELEGATECALL").unwrap();
    assert!(report.is_proxy);
    assert_eq!(report.patterns, vec![ContractPattern::Proxy]);
    assert!(report.function_selectors.is_empty());
}

#[test]
fn test_unknown_selector_is_reported_not_rejected() {
    init_tracing();
    let report = analyze_bytecode("PUSH4 0xdeadbeef\nEQ").unwrap();
    assert_eq!(report.function_selectors.len(), 1);
    assert_eq!(report.function_selectors[0].selector, "0xdeadbeef");
    assert_eq!(report.function_selectors[0].signature, None);
    assert_eq!(report.function_selectors[0].description, "Unknown function");
}

#[test]
fn test_empty_input_yields_empty_report() {
    init_tracing();
    let report = analyze_bytecode("").unwrap();
    assert_eq!(report.total_opcodes, 0);
    assert!(report.function_selectors.is_empty());
    assert!(report.patterns.is_empty());
    assert!(!report.is_proxy);
    assert!(!report.has_constructor);
    assert_eq!(report.complexity, Complexity::Low);
}

#[test]
fn test_all_pattern_rules_can_fire_together() {
    init_tracing();
    let asm = "\
DELEGATECALL
SSTORE
SELFDESTRUCT
CREATE2
CODECOPY
PUSH4 0x3659cfe6
PUSH4 0xa9059cbb
";
    let report = analyze_bytecode(asm).unwrap();
    assert_eq!(
        report.patterns,
        vec![
            ContractPattern::Proxy,
            ContractPattern::StateModification,
            ContractPattern::SelfDestruct,
            ContractPattern::ContractCreation,
            ContractPattern::Upgradeable,
            ContractPattern::Erc20Token,
        ]
    );
    assert!(report.is_proxy);
    assert!(report.has_constructor);
}

#[test]
fn test_pattern_labels_serialize_to_closed_vocabulary() {
    init_tracing();
    let report = analyze_bytecode("DELEGATECALL\nSSTORE\nPUSH4 0xa9059cbb").unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json["patterns"],
        serde_json::json!(["Proxy Pattern", "State Modification", "ERC-20 Token"])
    );
}

#[test]
fn test_oversized_input_is_a_distinct_error() {
    init_tracing();
    let config = AnalyzerConfig { max_input_bytes: 64 };
    let table = SignatureTable::known();
    let input = "JUMPDEST\n".repeat(100);

    let err = analyze(&input, &table, &config).unwrap_err();
    match err {
        AnalyzeError::SizeLimitExceeded { len, limit } => {
            assert_eq!(len, input.len());
            assert_eq!(limit, 64);
        }
        other => panic!("expected SizeLimitExceeded, got {other:?}"),
    }
}

#[test]
fn test_alternate_table_substitution() {
    init_tracing();
    let mut table = SignatureTable::new();
    table.insert("mint(address,uint256)");
    let report = analyze(
        "PUSH4 0x40c10f19\nPUSH4 0x3659cfe6",
        &table,
        &AnalyzerConfig::default(),
    )
    .unwrap();

    // mint resolves against the substitute table...
    assert_eq!(
        report.function_selectors[0].signature.as_deref(),
        Some("mint(address,uint256)")
    );
    // ...while upgradeTo is unknown to it, yet still marks the contract
    // upgradeable and proxy-like (pattern rules are table-independent).
    assert_eq!(report.function_selectors[1].signature, None);
    assert!(report.patterns.contains(&ContractPattern::Upgradeable));
    assert!(report.is_proxy);
}
