/// Module defining the EVM opcode vocabulary used by the analyzer.
///
/// The analyzer never executes bytecode; it only needs the canonical mnemonic
/// spellings that the selector extractor and pattern detector match against
/// (e.g. `PUSH4`, `DELEGATECALL`, `SSTORE`), plus enough parsing support to
/// recognize a mnemonic in pasted assembly text. The variant set is therefore
/// weighted toward dispatch, storage, and system opcodes rather than full
/// arithmetic coverage.
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Enumeration of the EVM opcodes relevant to heuristic contract analysis.
///
/// Single-byte opcodes are plain variants; variable-width stack operations
/// carry their index (`PUSH(4)` is `PUSH4`). Mnemonics outside this set fail
/// `FromStr`; the tokenizer treats such lines as opaque tokens rather than
/// rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // 0x range - stop & comparison
    STOP,   // 0x00
    LT,     // 0x10
    GT,     // 0x11
    EQ,     // 0x14
    ISZERO, // 0x15
    SHL,    // 0x1b
    SHR,    // 0x1c
    // 30x range - environment & calldata
    CALLDATALOAD, // 0x35
    CALLDATASIZE, // 0x36
    CODECOPY,     // 0x39
    EXTCODECOPY,  // 0x3c
    // 50x range - storage & control flow
    SLOAD,    // 0x54
    SSTORE,   // 0x55
    JUMP,     // 0x56
    JUMPI,    // 0x57
    JUMPDEST, // 0x5b
    PUSH0,    // 0x5f
    // 60x-90x range - variable-width stack ops
    PUSH(u8), // 0x60–0x7f (PUSH1 to PUSH32)
    DUP(u8),  // 0x80–0x8f (DUP1 to DUP16)
    SWAP(u8), // 0x90–0x9f (SWAP1 to SWAP16)
    // f0x range - system & termination
    CREATE,       // 0xf0
    CALL,         // 0xf1
    CALLCODE,     // 0xf2
    RETURN,       // 0xf3
    DELEGATECALL, // 0xf4
    CREATE2,      // 0xf5
    STATICCALL,   // 0xfa
    REVERT,       // 0xfd
    INVALID,      // 0xfe
    SELFDESTRUCT, // 0xff
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::STOP => write!(f, "STOP"),
            Opcode::LT => write!(f, "LT"),
            Opcode::GT => write!(f, "GT"),
            Opcode::EQ => write!(f, "EQ"),
            Opcode::ISZERO => write!(f, "ISZERO"),
            Opcode::SHL => write!(f, "SHL"),
            Opcode::SHR => write!(f, "SHR"),
            Opcode::CALLDATALOAD => write!(f, "CALLDATALOAD"),
            Opcode::CALLDATASIZE => write!(f, "CALLDATASIZE"),
            Opcode::CODECOPY => write!(f, "CODECOPY"),
            Opcode::EXTCODECOPY => write!(f, "EXTCODECOPY"),
            Opcode::SLOAD => write!(f, "SLOAD"),
            Opcode::SSTORE => write!(f, "SSTORE"),
            Opcode::JUMP => write!(f, "JUMP"),
            Opcode::JUMPI => write!(f, "JUMPI"),
            Opcode::JUMPDEST => write!(f, "JUMPDEST"),
            Opcode::PUSH0 => write!(f, "PUSH0"),
            Opcode::PUSH(n) => write!(f, "PUSH{}", n),
            Opcode::DUP(n) => write!(f, "DUP{}", n),
            Opcode::SWAP(n) => write!(f, "SWAP{}", n),
            Opcode::CREATE => write!(f, "CREATE"),
            Opcode::CALL => write!(f, "CALL"),
            Opcode::CALLCODE => write!(f, "CALLCODE"),
            Opcode::RETURN => write!(f, "RETURN"),
            Opcode::DELEGATECALL => write!(f, "DELEGATECALL"),
            Opcode::CREATE2 => write!(f, "CREATE2"),
            Opcode::STATICCALL => write!(f, "STATICCALL"),
            Opcode::REVERT => write!(f, "REVERT"),
            Opcode::INVALID => write!(f, "INVALID"),
            Opcode::SELFDESTRUCT => write!(f, "SELFDESTRUCT"),
        }
    }
}

/// Raised when a mnemonic string does not name a known opcode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mnemonic `{0}`")]
pub struct UnknownMnemonic(pub String);

impl FromStr for Opcode {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Opcode::*;

        if let Some(n) = parse_indexed(s, "PUSH", 1, 32) {
            return Ok(PUSH(n));
        }
        if let Some(n) = parse_indexed(s, "DUP", 1, 16) {
            return Ok(DUP(n));
        }
        if let Some(n) = parse_indexed(s, "SWAP", 1, 16) {
            return Ok(SWAP(n));
        }

        match s {
            "STOP" => Ok(STOP),
            "LT" => Ok(LT),
            "GT" => Ok(GT),
            "EQ" => Ok(EQ),
            "ISZERO" => Ok(ISZERO),
            "SHL" => Ok(SHL),
            "SHR" => Ok(SHR),
            "CALLDATALOAD" => Ok(CALLDATALOAD),
            "CALLDATASIZE" => Ok(CALLDATASIZE),
            "CODECOPY" => Ok(CODECOPY),
            "EXTCODECOPY" => Ok(EXTCODECOPY),
            "SLOAD" => Ok(SLOAD),
            "SSTORE" => Ok(SSTORE),
            "JUMP" => Ok(JUMP),
            "JUMPI" => Ok(JUMPI),
            "JUMPDEST" => Ok(JUMPDEST),
            "PUSH0" => Ok(PUSH0),
            "CREATE" => Ok(CREATE),
            "CALL" => Ok(CALL),
            "CALLCODE" => Ok(CALLCODE),
            "RETURN" => Ok(RETURN),
            "DELEGATECALL" => Ok(DELEGATECALL),
            "CREATE2" => Ok(CREATE2),
            "STATICCALL" => Ok(STATICCALL),
            "REVERT" => Ok(REVERT),
            "INVALID" => Ok(INVALID),
            "SELFDESTRUCT" => Ok(SELFDESTRUCT),
            other => Err(UnknownMnemonic(other.to_string())),
        }
    }
}

/// Parses mnemonics like `PUSH4` / `DUP1` / `SWAP16` into their index.
fn parse_indexed(s: &str, prefix: &str, min: u8, max: u8) -> Option<u8> {
    let suffix = s.strip_prefix(prefix)?;
    let n: u8 = suffix.parse().ok()?;
    (min..=max).contains(&n).then_some(n)
}
