// Aggregator test: include tests from tests/rust/* as distinct modules.
// This keeps sources organized while providing a single integration test
// file that Cargo will compile and run.

mod rust_tests {
    pub mod cli_help {
        include!("rust/cli_help.rs");
    }
    pub mod cli_version {
        include!("rust/cli_version.rs");
    }
    pub mod cli_log {
        include!("rust/cli_log.rs");
    }
    pub mod cli_table_highlight {
        include!("rust/cli_table_highlight.rs");
    }
    pub mod cli_time {
        include!("rust/cli_time.rs");
    }
    pub mod cli_config {
        include!("rust/cli_config.rs");
    }
    pub mod library_api {
        include!("rust/library_api.rs");
    }
}

// Re-export tests so the test runner finds them at crate root.
pub use rust_tests::*;
