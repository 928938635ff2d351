//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests must serialize mutations to process-global state (cwd/env).
//! - Error messages must never contain values from `.env` files.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var("DOTENV_DISABLED", None::<&str>, || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
#[serial]
fn test_invalid_dotenv_does_not_leak_values() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    let private_value = "private_value_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("INFO_POPUP_SECRET={private_value}\nINVALID_LINE_WITHOUT_EQUALS"),
    )
    .unwrap();

    temp_env::with_var("DOTENV_DISABLED", None::<&str>, || {
        match ConfigLoader::new().load_dotenv() {
            Err(e @ ConfigError::DotenvParse { .. }) => {
                let message = e.to_string();
                assert!(!message.contains(private_value), "{message}");
                assert!(message.contains("DOTENV_DISABLED"), "{message}");
            }
            Err(other) => panic!("expected DotenvParse, got {other}"),
            Ok(_) => panic!("expected DotenvParse, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    temp_env::with_var("DOTENV_DISABLED", Some("1"), || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
