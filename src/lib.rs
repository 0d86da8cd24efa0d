//! Typed Rust client for the Clickatell HTTP SMS API.
//!
//! The design keeps three layers apart: a domain layer of strong types, a
//! transport layer for the gateway's wire format (form-encoded GET queries
//! answered by `Key: Value` text lines), and a small client layer that
//! authenticates once and dispatches operations.
//!
//! ```rust,no_run
//! use clickatell::{ClickatellClient, NO_PARAMS};
//!
//! fn main() -> Result<(), clickatell::ClickatellError> {
//!     let client = ClickatellClient::new("user", "password", "3141592")?;
//!     let sent = client.sendmsg([("to", "27999000001"), ("text", "hello")])?;
//!     println!("message id: {:?}", sent.single("ID"));
//!
//!     let balance = client.getbalance(NO_PARAMS)?;
//!     println!("credit: {:?}", balance.single("Credit"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ClickatellClient, ClickatellClientBuilder, ClickatellError, NO_PARAMS};
pub use domain::{
    ApiId, Credentials, GatewayError, Operation, ParsedResponse, Password, SessionId,
    UnknownOperation, User, ValidationError, Value,
};
