//! Error Extension Tests

use mrqc_domain::error::{Error, Result};
use mrqc_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read file");

    let Err(Error::Io { message, source }) = result else {
        panic!("Expected Io error");
    };
    assert!(message.contains("failed to read file"));
    assert!(message.contains("file not found"));
    assert!(source.is_some());
}

#[test]
fn test_config_context() {
    let result: Result<()> = not_found().config_context("bad config");
    assert!(matches!(
        result,
        Err(Error::Configuration {
            source: Some(_),
            ..
        })
    ));
}

#[test]
fn test_csv_context() {
    let result: Result<()> = not_found().csv_context("bad table");
    let Err(Error::Csv { message }) = result else {
        panic!("Expected Csv error");
    };
    assert!(message.starts_with("bad table: "));
}

#[test]
fn test_lazy_context() {
    let result: Result<()> = not_found().with_context(|| format!("item {}", 3));
    let Err(Error::Internal { message }) = result else {
        panic!("Expected Internal error");
    };
    assert_eq!(message, "item 3: file not found");
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8> = Ok::<u8, io::Error>(5).context("unused");
    assert_eq!(value.unwrap(), 5);
}
