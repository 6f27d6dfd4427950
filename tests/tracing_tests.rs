//! Tests for tracing integration.
#![cfg(feature = "tracing")]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use error_kind::entry::{field, restricted_field};
use error_kind::kind::{Registry, VALIDATION_ERROR};
use error_kind::{trace_err, Dto, Error};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn trace_emits_chain_kind_and_restricted_entries() {
    let inner = Error::new(&VALIDATION_ERROR, "bad email", [restricted_field("raw", "a@b")]);
    let err = Error::propagate(inner, "signup failed", [field("step", "verify")]);

    let output = capture(|| err.trace());

    assert!(output.contains("ERROR"), "{output}");
    assert!(output.contains("signup failed: bad email"), "{output}");
    assert!(output.contains("ValidationError::UserError::Error"), "{output}");
    assert!(output.contains("E00004"), "{output}");
    assert!(output.contains("a@b"), "{output}");
}

#[test]
fn trace_err_passes_result_through() {
    let mut result = Ok(());
    let output = capture(|| {
        result = trace_err(Err::<(), _>(Error::raw(&VALIDATION_ERROR, "rejected", [])));
    });

    assert!(result.is_err());
    assert!(output.contains("rejected"), "{output}");

    let output = capture(|| {
        trace_err(Ok(5)).unwrap();
    });
    assert!(output.is_empty(), "{output}");
}

#[test]
fn decode_fallback_is_logged_at_debug() {
    let registry = Registry::with_builtin_kinds();
    let dto = Dto { error: "x".into(), kind: "NoSuchKind".into(), details: None };

    let output = capture(|| {
        let _ = dto.decode_with(&registry);
    });

    assert!(output.contains("NoSuchKind"), "{output}");
}

#[test]
fn log_value_includes_everything() {
    let err = Error::new(&VALIDATION_ERROR, "bad", [restricted_field("token", "t-1")]);
    let value = err.log_value();

    assert_eq!(value["message"], "bad");
    assert_eq!(value["code"], "E00004");
    assert_eq!(value["status"], 400);
    assert_eq!(value["entries"]["token"], "t-1");
    assert!(value["entries"].get("stacktrace").is_some());
}
