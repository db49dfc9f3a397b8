//! Error Extension Tests

use std::io;
use trofes_domain::error::{Error, Result};
use trofes_infrastructure::error_ext::ErrorContext;

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "file not found")
}

#[test]
fn test_io_context() {
    let result: Result<()> = Err(not_found()).io_context("failed to read bundle");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read bundle"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = Err(not_found()).config_context("bad config");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_bundle_context() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let result: Result<()> = Err(parse).bundle_context("Malformed bundle");
    match result {
        Err(Error::Bundle { message, source }) => {
            assert!(message.starts_with("Malformed bundle: "));
            assert!(source.is_some());
        }
        other => panic!("Expected Bundle error, got {other:?}"),
    }
}

#[test]
fn test_success_passes_through() {
    let ok: Result<u8> = Ok::<u8, io::Error>(3).io_context("unused");
    assert_eq!(ok.unwrap(), 3);
}
