//! Typed Rust client for the Infobip SMS HTTP API.
//!
//! The crate has three layers: a domain layer of plain request/response
//! values with local validation, a transport layer for the wire format, and
//! a small client layer orchestrating requests over an injectable
//! [`HttpTransport`].
//!
//! ```rust,no_run
//! use infobip::{InfobipClient, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), infobip::InfobipError> {
//!     let client = InfobipClient::new("username", "password")?;
//!     let message = Message::new("InfoSMS", "41793026727", "hello");
//!     let response = client.single_message(&message).await?;
//!     for sent in response.messages {
//!         println!("{} -> {}", sent.message_id, sent.status.name);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BasicAuth, HttpMethod, HttpRequest, HttpResponse, HttpTransport, InfobipClient,
    InfobipClientBuilder, InfobipError, ReqwestTransport,
};
pub use domain::{
    Amount, BulkMessage, Destination, KnownErrorGroup, KnownStatusGroup, Message, Number,
    Response, ResponseMessage, ResponseStatus, SearchNumberParams, SearchNumberResponse,
    SentSmsError, SentSmsPrice, SentSmsReport, SentSmsStatus, SmsReportResponse,
    ValidationError,
};
