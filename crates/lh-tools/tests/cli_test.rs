//! Startup path shared by the tools

use clap::Parser;
use lh_auth::{PasswordHash, PasswordHasher, Pbkdf2Sha256};
use lh_tools::{render_generated, GenerateArgs, ResetArgs};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_from_command_line() {
    let file = config_file(
        r#"
admin:
  email: owner@school.dev
  username: owner
password:
  iterations: 1000
"#,
    );
    let path = file.path().to_str().unwrap();

    let args = ResetArgs::try_parse_from(["reset-admin-password", "-c", path, "MyNewPassword123"]).unwrap();
    let config = args.common.load_config().unwrap();

    assert_eq!(config.password.iterations, 1000);
    assert_eq!(config.password.min_length, 8);

    let lookup = args.admin_lookup(&config);
    assert_eq!(lookup.email, "owner@school.dev");
    assert_eq!(lookup.username, "owner");
}

#[test]
fn test_invalid_config_is_reported() {
    let file = config_file("admin:\n  email: nope\n");
    let path = file.path().to_str().unwrap();

    let args = GenerateArgs::try_parse_from(["generate-password-hash", "--config", path, "pw"]).unwrap();
    let err = args.common.load_config().unwrap_err();
    assert!(err.to_string().contains("Failed to load configuration from"));

    let args = GenerateArgs::try_parse_from(["generate-password-hash", "--config", "/nonexistent/lh.yaml", "pw"]).unwrap();
    assert!(args.common.load_config().is_err());
}

#[test]
fn test_generated_sql_carries_a_verifiable_hash() {
    let hasher = Pbkdf2Sha256::new(1000);
    let hash = hasher.hash_password("Admin123!");
    let text = render_generated("Admin123!", &hash, "admin@school.dev");

    let sql = text
        .lines()
        .find(|line| line.starts_with("UPDATE users"))
        .unwrap();
    let stored = sql
        .split('\'')
        .nth(1)
        .unwrap();

    let parsed = PasswordHash::parse(stored).unwrap();
    assert_eq!(parsed.iterations, 1000);
    assert!(parsed.matches("Admin123!"));
    assert!(!parsed.matches("admin123!"));
}
