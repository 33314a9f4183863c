//! Transport layer: wire DTOs and JSON/query encoding for the Infobip API.

mod message;
mod money;
mod number;
mod report;

pub use message::{
    decode_send_json_response, encode_bulk_message_json, encode_single_message_json,
};
pub use number::{decode_search_number_json_response, encode_search_number_query};
pub use report::{decode_delivery_report_json_response, encode_delivery_report_query};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Treat `Some("")` the same as `None`.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
