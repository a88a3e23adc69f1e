//! Cross-crate integration tests for the opsight workspace.

#[cfg(test)]
mod analysis;

#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
