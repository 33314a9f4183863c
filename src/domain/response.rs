use crate::domain::value::{Amount, KnownErrorGroup, KnownStatusGroup};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Result of a single or advanced (bulk) send.
pub struct Response {
    pub bulk_id: Option<String>,
    pub messages: Vec<ResponseMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMessage {
    pub message_id: String,
    pub to: String,
    pub status: ResponseStatus,
    /// Number of SMS segments the text was split into.
    pub sms_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStatus {
    pub id: i32,
    pub group_id: i32,
    pub group_name: String,
    pub name: String,
    pub description: String,
}

impl ResponseStatus {
    pub fn known_group(&self) -> Option<KnownStatusGroup> {
        KnownStatusGroup::from_id(self.group_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Delivery reports, one per message.
pub struct SmsReportResponse {
    pub results: Vec<SentSmsReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Final delivery outcome and cost of one sent message.
///
/// Timestamps are kept exactly as Infobip formats them.
pub struct SentSmsReport {
    pub bulk_id: Option<String>,
    pub message_id: String,
    pub to: String,
    pub sent_at: String,
    pub done_at: String,
    pub sms_count: u32,
    /// Mobile country and network codes of the recipient.
    pub mcc_mnc: Option<String>,
    pub price: SentSmsPrice,
    pub status: SentSmsStatus,
    pub error: Option<SentSmsError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentSmsStatus {
    pub id: i32,
    pub group_id: i32,
    pub group_name: String,
    pub name: String,
    pub description: String,
    pub action: Option<String>,
}

impl SentSmsStatus {
    pub fn known_group(&self) -> Option<KnownStatusGroup> {
        KnownStatusGroup::from_id(self.group_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentSmsError {
    pub id: i32,
    pub group_id: i32,
    pub group_name: String,
    pub name: String,
    pub description: String,
    /// `true` when retrying the same message will not help.
    pub permanent: bool,
}

impl SentSmsError {
    pub fn known_group(&self) -> Option<KnownErrorGroup> {
        KnownErrorGroup::from_id(self.group_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentSmsPrice {
    pub price_per_message: Amount,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Available numbers matching a [`SearchNumberParams`](crate::SearchNumberParams) query.
pub struct SearchNumberResponse {
    pub number_count: u32,
    pub numbers: Vec<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Number {
    pub number_key: String,
    pub number: String,
    pub country: String,
    /// Number type as reported by Infobip (e.g. `VIRTUAL_LONG_NUMBER`).
    pub number_type: String,
    /// e.g. `SMS`, `VOICE`.
    pub capabilities: Vec<String>,
}
