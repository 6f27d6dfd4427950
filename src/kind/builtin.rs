//! The standard taxonomy every process starts with.
//!
//! `UserError` branches map towards 4xx statuses, `SystemError` branches
//! towards 5xx. The global registry registers all of them before any
//! application kind.

use super::Kind;

pub static ERROR: Kind = Kind::new("Error", "U00000")
    .with_description("Any error that has not been mapped in the application.");

pub static USER_ERROR: Kind = Kind::new("UserError", "E00001")
    .with_description("Any error that was caused by some incorrect user action.")
    .with_status(400)
    .with_parent(&ERROR);

pub static SYSTEM_ERROR: Kind = Kind::new("SystemError", "S00001")
    .with_description("Any error that was caused by some unexpected system failure.")
    .with_status(500)
    .with_parent(&ERROR);

/// Assigned to foreign errors propagated without an explicit kind.
pub static UNKNOWN_ERROR: Kind = Kind::new("UnknownError", "U00001")
    .with_description("A failure that carried no classification of its own.")
    .with_parent(&ERROR);

/// Assigned by the DTO decoder when the remote kind is unknown locally.
pub static EXTERNAL_UNKNOWN_ERROR: Kind = Kind::new("ExternalUnknownError", "U00002")
    .with_description("A failure received from another process whose kind is not registered here.")
    .with_parent(&UNKNOWN_ERROR);

pub static INVALID_REQUEST_ERROR: Kind = Kind::new("InvalidRequestError", "E00002")
    .with_description("The request is incorrectly formatted or has errors in the request body.")
    .with_status(400)
    .with_parent(&USER_ERROR);

pub static NOT_FOUND_ERROR: Kind = Kind::new("NotFoundError", "E00003")
    .with_description("The requested resource was not found in our system or external services.")
    .with_status(404)
    .with_parent(&USER_ERROR);

pub static VALIDATION_ERROR: Kind = Kind::new("ValidationError", "E00004")
    .with_description("Some field on a form was filled incorrectly by the user or is missing.")
    .with_status(400)
    .with_parent(&USER_ERROR);

pub static AUTH_ERROR: Kind = Kind::new("AuthError", "E00005")
    .with_description("An error occurred during authentication, such as invalid credentials.")
    .with_status(401)
    .with_parent(&USER_ERROR);

pub static FORBIDDEN_ERROR: Kind = Kind::new("ForbiddenError", "E00006")
    .with_description("The user does not have permission to access the requested resource.")
    .with_status(403)
    .with_parent(&USER_ERROR);

pub static DATABASE_TRANSACTION_ERROR: Kind = Kind::new("DatabaseTransactionError", "S00002")
    .with_description("A database transaction could not be started, committed or rolled back.")
    .with_parent(&SYSTEM_ERROR);

pub static DATABASE_RECORD_NOT_FOUND_ERROR: Kind =
    Kind::new("DatabaseRecordNotFoundError", "S00003")
        .with_description("A query expected a record that does not exist.")
        .with_parent(&SYSTEM_ERROR);

pub static CONTEXT_ERROR: Kind = Kind::new("ContextError", "S00004")
    .with_description("The request context is missing or malformed.")
    .with_parent(&SYSTEM_ERROR);

pub static CONTEXT_VALUE_NOT_FOUND_ERROR: Kind = Kind::new("ContextValueNotFoundError", "S00005")
    .with_description("A value expected in the request context was not set.")
    .with_parent(&CONTEXT_ERROR);

/// Every built-in kind, parents before children.
pub static BUILTIN_KINDS: [&Kind; 14] = [
    &ERROR,
    &USER_ERROR,
    &SYSTEM_ERROR,
    &UNKNOWN_ERROR,
    &EXTERNAL_UNKNOWN_ERROR,
    &INVALID_REQUEST_ERROR,
    &NOT_FOUND_ERROR,
    &VALIDATION_ERROR,
    &AUTH_ERROR,
    &FORBIDDEN_ERROR,
    &DATABASE_TRANSACTION_ERROR,
    &DATABASE_RECORD_NOT_FOUND_ERROR,
    &CONTEXT_ERROR,
    &CONTEXT_VALUE_NOT_FOUND_ERROR,
];
