//! The process-wide registry lives for the whole test binary, so its
//! lifecycle is exercised from a single test.

use std::panic;

use error_kind::entry::field;
use error_kind::kind::{self, Kind, EXTERNAL_UNKNOWN_ERROR, USER_ERROR, VALIDATION_ERROR};
use error_kind::{Dto, Error};

static RATE_LIMITED: Kind = Kind::new("RateLimitedError", "R00001")
    .with_parent(&USER_ERROR)
    .with_status(429);
static LATE: Kind = Kind::new("LateError", "R00002");

#[test]
fn registry_lifecycle() {
    // open phase
    kind::register(&[&RATE_LIMITED]);

    // first read freezes
    assert!(core::ptr::eq(kind::get_by_code("R00001"), &RATE_LIMITED));
    assert!(core::ptr::eq(kind::get_by_name("ValidationError"), &VALIDATION_ERROR));
    assert!(kind::find_by_code("R00002").is_none());
    assert!(kind::find_by_name("LateError").is_none());

    let late = panic::catch_unwind(|| kind::register(&[&LATE]));
    assert!(late.is_err(), "registering after the first read must panic");
    assert!(!kind::registry().contains(&LATE));

    // freezing again is a no-op
    kind::freeze();
    assert!(kind::registry().contains(&RATE_LIMITED));

    // DTO decoding uses the frozen registry
    let err = Error::new(&RATE_LIMITED, "slow down", [field("retry_after", 30)]);
    let decoded = Dto::from_json(&err.dto().to_json().unwrap()).unwrap().decode();
    assert!(core::ptr::eq(decoded.kind(), &RATE_LIMITED));
    assert_eq!(decoded.status_code(), 429);

    let foreign = Dto { error: "boom".into(), kind: "MysteryError".into(), details: None };
    let decoded: Error = foreign.into();
    assert!(core::ptr::eq(decoded.kind(), &EXTERNAL_UNKNOWN_ERROR));
}
