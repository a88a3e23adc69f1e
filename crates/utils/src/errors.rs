use thiserror::Error;

/// Error type for a single analysis call.
///
/// Every variant is terminal for the call that raised it: the analyzer never
/// produces a partial report. "No selectors found" and "no patterns detected"
/// are successful outcomes, not errors.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Input exceeds the configured byte cap. Scanning is linear, but the
    /// input is attacker-controllable text, so unbounded size is refused
    /// outright rather than truncated.
    #[error("input size {len} exceeds limit of {limit} bytes")]
    SizeLimitExceeded { len: usize, limit: usize },

    /// The text scan itself faulted. Surfaced to the caller as a
    /// discriminated failure instead of a half-populated report.
    #[error("bytecode scan failed: {0}")]
    Scan(String),
}

/// Custom error type for CLI input handling.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
