//! Example: raising, propagating and answering errors
//!
//! Run with: `cargo run --example quick_start`

use error_kind::entry::{hint, redacted, restricted_field, system_scope, user_scope, validation};
use error_kind::kind::{self, Kind, DATABASE_RECORD_NOT_FOUND_ERROR, USER_ERROR, VALIDATION_ERROR};
use error_kind::prelude::*;

// =============================================================================
// Application kinds
// =============================================================================

static SUBSCRIPTION_EXPIRED: Kind = Kind::new("SubscriptionExpiredError", "A00001")
    .with_description("The account's subscription ended.")
    .with_status(402)
    .with_parent(&USER_ERROR);

// =============================================================================
// Layers
// =============================================================================

fn find_account(email: &str) -> Result<u64> {
    Err(Error::new(
        &DATABASE_RECORD_NOT_FOUND_ERROR,
        "no rows returned",
        [system_scope([restricted_field("sql", "SELECT id FROM accounts WHERE email = $1")])],
    ))
    .propagate_with("looking up account", [redacted("email", email)])
}

fn check_subscription(account: u64) -> Result<()> {
    if account % 2 == 0 {
        return Err(raise!(&SUBSCRIPTION_EXPIRED, "subscription for account {} expired", account;
            [hint("renew from the billing page")]));
    }
    Ok(())
}

fn sign_in(email: &str) -> Result<u64> {
    if !email.contains('@') {
        return Err(Error::new(
            &VALIDATION_ERROR,
            "invalid sign-in request",
            [validation([("email", "must be an email address")])],
        ));
    }

    let account = find_account(email)
        .or_kind(&NOT_FOUND_ERROR)
        .with_entries([user_scope(fields!("email" => email))])?;
    check_subscription(account)?;
    Ok(account)
}

fn answer(result: Result<u64>) {
    match result {
        Ok(account) => println!("200 {{\"account\":{account}}}"),
        Err(err) => {
            let (status, body) = Dto::for_response(&err);
            println!("{status} {}", body.to_json().unwrap_or_default());
            println!("    log: {}", err.log_value()["error"]);
        },
    }
}

fn main() {
    kind::register(&[&SUBSCRIPTION_EXPIRED]);
    kind::freeze();

    answer(sign_in("not-an-email"));
    answer(sign_in("ada@example.com"));
    answer(check_subscription(4).map(|()| 4));
}
