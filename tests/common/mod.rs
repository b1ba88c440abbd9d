use std::{io::Write, sync::Once};

use tempfile::NamedTempFile;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Writes `contents` to a temporary `.csv` file that lives as long as the handle.
pub fn write_table(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write temp file");

    file
}

pub const SEASON_TABLE: &str = "\
Name,TR-1,TR-2,CM-Doubles,TN-Worlds,CR-Finals
Avery,54,52,,49,51
Blake,57,55,50,53,
Casey,60,,48,55,56
Devon,,58,52,51,54
";
