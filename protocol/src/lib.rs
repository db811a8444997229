//! JSON call boundary for pokeduel.
//!
//! Each request is one JSON object tagged by `"method"`. Raw call arguments are
//! validated here and converted into typed inputs before anything in
//! `pokeduel-battle` runs.

use thiserror::Error;

pub mod dispatch;
pub mod request;
pub mod response;

#[cfg(test)]
mod tests;

pub use dispatch::{dispatch, error_line, handle_line};
pub use request::{Request, battle_args, parse_request};
pub use response::{ErrorBody, ErrorResponse, Response};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid request format: {0}")]
    InvalidFormat(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Empty request")]
    EmptyRequest,

    #[error("Request is not valid UTF-8")]
    NotUtf8,

    #[error("Request exceeds {0} bytes")]
    TooLong(usize),
}

impl ParseError {
    /// Wire error kind for every parse failure
    pub const KIND: &'static str = "InvalidRequest";
}
