use assert_cmd::Command;
use std::path::Path;

/// Nothing listens on port 1, so requests fail fast with a connection error.
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:1";

/// A `cardtrack` command isolated from the caller's environment.
#[allow(deprecated)]
pub fn cardtrack(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cardtrack").unwrap();
    cmd.env_remove("CARDTRACK_BACKEND_URL")
        .env_remove("BACKEND_URL")
        .env_remove("CARDTRACK_HOST_CONTEXT")
        .env_remove("CARDTRACK_HOST_FILE")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--backend-url")
        .arg(UNREACHABLE_BACKEND);
    cmd
}
