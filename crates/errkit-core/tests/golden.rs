//! Fixture-driven integration tests for errkit-core.
//!
//! Each test loads a JSON code table from `fixtures/codes/` into a fresh
//! registry and drives the wrap → lookup → branch → render flow an HTTP
//! service would run.

use std::error::Error;

use errkit_core::{has_code, CodeDescriptor, CodeRegistry, CodedError, UNKNOWN_CODE};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/codes");
    p.push(name);
    p
}

fn registry_from_fixture(name: &str) -> CodeRegistry {
    let json = std::fs::read_to_string(fixture_path(name)).expect("fixture not found");
    let reg = CodeRegistry::new();
    reg.load_json(&json).expect("fixture table failed to load");
    reg
}

fn db_error() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "no rows returned")
}

// ─── End-to-end scenario ───────────────────────────────────────────────────────

#[test]
fn user_not_found_end_to_end() {
    let reg = registry_from_fixture("user-codes.json");

    let err = CodedError::wrap(db_error(), 110001, "lookup failed");

    let desc = reg.lookup(Some(&err)).expect("an error must resolve");
    assert_eq!(desc.http_status, 404);
    assert_eq!(desc.message, "User not found");
    assert!(desc.reference.is_some());

    assert!(has_code(&err, 110001));
    assert!(!has_code(&err, UNKNOWN_CODE));
}

#[test]
fn rewrapping_keeps_every_layer_reachable() {
    let reg = registry_from_fixture("user-codes.json");

    // storage layer -> service layer -> handler layer
    let storage = CodedError::wrap(db_error(), 110102, "secret row missing");
    let service = CodedError::wrap(storage, 110001, "owner of secret not found");

    // the boundary sees the outermost code
    let desc = reg.lookup(Some(&service)).unwrap();
    assert_eq!(desc.code, 110001);
    assert_eq!(desc.http_status, 404);

    // intermediate layers can still branch on the inner code
    assert!(has_code(&service, 110102));

    // the original cause is preserved at the end of the chain
    let mut terminal: &(dyn Error + 'static) = &service;
    while let Some(next) = terminal.source() {
        terminal = next;
    }
    assert_eq!(terminal.to_string(), "no rows returned");
}

#[test]
fn unlisted_code_degrades_to_unknown_descriptor() {
    let reg = registry_from_fixture("extra-codes.json");

    let err = CodedError::new(130001, "code nobody registered");
    let desc = reg.lookup(Some(&err)).unwrap();
    assert_eq!(desc, CodeDescriptor::unknown());
}

#[test]
fn fixture_tables_merge_into_one_registry() {
    let reg = registry_from_fixture("user-codes.json");
    let extra = std::fs::read_to_string(fixture_path("extra-codes.json")).unwrap();
    let added = reg.load_json(&extra).unwrap();

    assert_eq!(added, 3);
    // 1 unknown + 4 user/secret + 3 extra
    assert_eq!(reg.len(), 8);
    assert_eq!(reg.get(120001).unwrap().message, "Order not found");
}

// ─── Renderings over a realistic chain ────────────────────────────────────────

#[test]
fn renderings_of_a_three_level_chain() {
    let storage = CodedError::wrap(db_error(), 110102, "secret row missing");
    let handler = CodedError::wrap(storage, 110001, "get user failed");

    // plain: outermost message only
    assert_eq!(handler.to_string(), "get user failed");

    // detailed: all messages, the terminal io error last, stacks included
    let detailed = format!("{handler:?}");
    assert!(detailed.contains("get user failed"));
    assert!(detailed.contains("caused by: secret row missing"));
    assert!(detailed.contains("caused by: no rows returned"));
    assert!(detailed.contains("stack backtrace:"));

    // structured: nested machine-readable tree
    let value = serde_json::to_value(&handler).unwrap();
    assert_eq!(value["code"], 110001);
    assert_eq!(value["cause"]["code"], 110102);
    assert_eq!(value["cause"]["cause"], "no rows returned");
}
