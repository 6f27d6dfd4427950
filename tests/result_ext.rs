use std::cell::Cell;
use std::io;

use error_kind::entry::{field, Entry};
use error_kind::kind::{NOT_FOUND_ERROR, SYSTEM_ERROR, UNKNOWN_ERROR, VALIDATION_ERROR};
use error_kind::{Error, ErrorResultExt, ResultExt};

fn read_config() -> Result<String, io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "config.toml missing"))
}

fn parse_port(raw: &str) -> error_kind::Result<u16> {
    raw.parse::<u16>().propagate_as(&VALIDATION_ERROR, "port must be a number")
}

#[test]
fn ok_passes_through() {
    let value: Result<u8, io::Error> = Ok(7);

    assert_eq!(value.propagate("unused").unwrap(), 7);
    assert_eq!(parse_port("8080").unwrap(), 8080);
}

#[test]
fn propagate_wraps_foreign_errors() {
    let err = read_config().propagate("loading configuration").unwrap_err();

    assert!(err.is(&UNKNOWN_ERROR));
    assert_eq!(err.message(), "loading configuration");
    assert_eq!(format!("{err:#}"), "loading configuration: config.toml missing");
}

#[test]
fn propagate_as_reclassifies() {
    let err = parse_port("eighty").unwrap_err();

    assert!(err.is(&VALIDATION_ERROR));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn propagate_with_attaches_entries() {
    let err = read_config()
        .propagate_with("loading configuration", [field("path", "config.toml")])
        .unwrap_err();

    assert_eq!(err.details().unwrap()["path"], "config.toml");
}

#[test]
fn propagate_keeps_kind_of_model_errors() {
    let inner: error_kind::Result<()> = Err(Error::raw(&NOT_FOUND_ERROR, "no user", []));
    let err = inner.propagate("loading profile").unwrap_err();

    assert!(err.is(&NOT_FOUND_ERROR));
}

#[test]
fn lazy_message_runs_only_on_error() {
    let calls = Cell::new(0);
    let build = || {
        calls.set(calls.get() + 1);
        "expensive message"
    };

    let ok: Result<(), io::Error> = Ok(());
    ok.propagate_with_fn(build).unwrap();
    assert_eq!(calls.get(), 0);

    let err = read_config().propagate_with_fn(build).unwrap_err();
    assert_eq!(calls.get(), 1);
    assert_eq!(err.message(), "expensive message");
}

#[test]
fn hop_points_at_the_extension_call() {
    let line = line!() + 1;
    let err = read_config().propagate("loading configuration").unwrap_err();

    match err.entry("reverse_trace") {
        Some(Entry::ReverseTrace(trace)) => {
            let hop = &trace.hops()[0];
            assert!(hop.starts_with(&format!("[{}:{line}] ", file!())), "hop was {hop}");
        },
        other => panic!("expected a reverse trace, got {other:?}"),
    }
}

#[test]
fn error_results_take_entries_and_kinds() {
    let result: error_kind::Result<()> = Err(Error::raw(&NOT_FOUND_ERROR, "missing", []));

    let err = result.with_entries([field("id", 4)]).or_kind(&SYSTEM_ERROR).unwrap_err();

    assert!(err.is(&SYSTEM_ERROR));
    assert_eq!(err.details().unwrap()["id"], 4);
}
