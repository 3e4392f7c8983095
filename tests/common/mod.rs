//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Path of a certificate under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Bytes of a certificate under `tests/fixtures`.
///
/// # Panics
/// Panics when the fixture is missing.
pub fn fixture(name: &str) -> Vec<u8> {
    let path = fixture_path(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("fixture {}: {e}", path.display()))
}

/// Fixtures that carry a subjectKeyIdentifier, with the expected signer name
/// and key identifier (hex).
pub const SIGNER_FIXTURES: [(&str, &str, &str); 3] = [
    (
        "example_corp.der",
        "Example Corp Root CA",
        "ce8ade26122c0a1fc4abd2223ccf069880e25bc0",
    ),
    (
        "acme_intl.der",
        "ACME-International Signing",
        "3e28c5d68ab7651b517a7e0d270c5ef7f93736d9",
    ),
    (
        "email_only.der",
        "sign@example.com",
        "159be8792f8f6d05f43a9dc67e53c0de89f4d2e2",
    ),
];

/// Fixtures without a subjectKeyIdentifier.
pub const NO_KEY_ID_FIXTURES: [&str; 2] = ["no_ski.der", "extensions_no_ski.der"];
