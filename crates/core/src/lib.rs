pub mod opcode;
pub mod selectors;
pub mod signatures;
pub mod tokenizer;

pub use opcode::Opcode;
