use crate::domain::validation::{self, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A text message addressed to one or more recipients.
///
/// Recipients go either in [`Message::to`] or in [`Message::destinations`]
/// (the latter lets you pre-assign a message id per recipient).
pub struct Message {
    /// Sender id: a phone number or an alphanumeric name.
    pub from: String,
    /// Single recipient. `None` or empty means "not provided".
    pub to: Option<String>,
    pub destinations: Vec<Destination>,
    pub text: String,
    /// Transliteration mode (for example `TURKISH`, `GREEK`).
    pub transliteration: Option<String>,
    /// Language code for national language shift tables.
    pub language_code: Option<String>,
}

impl Message {
    /// Message to a single recipient.
    pub fn new(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: Some(to.into()),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Message to a list of destinations.
    pub fn to_destinations(
        from: impl Into<String>,
        destinations: Vec<Destination>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            destinations,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Check sender and recipients. Order: `from`, each destination, then `to`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::check_from(&self.from)?;
        for destination in &self.destinations {
            validation::check_destination(&destination.to)?;
        }
        validation::check_to(self.to.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// One recipient inside [`Message::destinations`].
pub struct Destination {
    pub to: String,
    /// Caller-assigned message id for this recipient.
    pub message_id: Option<String>,
}

impl Destination {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            message_id: None,
        }
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Several messages sent in one request.
pub struct BulkMessage {
    /// Caller-assigned bulk id. Infobip generates one when absent.
    pub bulk_id: Option<String>,
    pub messages: Vec<Message>,
}

impl BulkMessage {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            bulk_id: None,
            messages,
        }
    }

    pub fn with_bulk_id(mut self, bulk_id: impl Into<String>) -> Self {
        self.bulk_id = Some(bulk_id.into());
        self
    }

    /// Validate every message in order and stop at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.messages.iter().try_for_each(Message::validate)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for the available-number search.
///
/// Only fields that are set (and non-empty) end up in the query string.
pub struct SearchNumberParams {
    /// Number pattern to match.
    pub number: Option<String>,
    /// Comma-separated capabilities, e.g. `SMS,VOICE`.
    pub capabilities: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}
