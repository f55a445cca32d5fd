pub mod logger;

// CLI driver (requires terminal, tokio runtime, etc.)
#[cfg(feature = "cli")]
pub mod cli;
