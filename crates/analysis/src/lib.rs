pub mod analyzer;
pub mod complexity;
pub mod patterns;

pub use analyzer::{
    AnalyzerConfig, BytecodeAnalysis, FunctionSelector, analyze, analyze_bytecode,
};
pub use complexity::Complexity;
pub use patterns::ContractPattern;
