use serde::{Deserialize, Serialize};

use super::{TransportError, non_empty};
use crate::domain::{BulkMessage, Destination, Message, Response, ResponseMessage, ResponseStatus};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkMessageJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    bulk_id: Option<&'a str>,
    messages: Vec<MessageJson<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageJson<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    from: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    destinations: Vec<DestinationJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    transliteration: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DestinationJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<&'a str>,
    to: &'a str,
}

impl<'a> From<&'a Message> for MessageJson<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            from: &message.from,
            destinations: message.destinations.iter().map(Into::into).collect(),
            to: non_empty(message.to.as_deref()),
            text: &message.text,
            transliteration: non_empty(message.transliteration.as_deref()),
            language_code: non_empty(message.language_code.as_deref()),
        }
    }
}

impl<'a> From<&'a Destination> for DestinationJson<'a> {
    fn from(destination: &'a Destination) -> Self {
        Self {
            message_id: non_empty(destination.message_id.as_deref()),
            to: &destination.to,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseJson {
    #[serde(default)]
    bulk_id: Option<String>,
    #[serde(default)]
    messages: Option<Vec<ResponseMessageJson>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseMessageJson {
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    status: Option<ResponseStatusJson>,
    #[serde(default)]
    sms_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseStatusJson {
    #[serde(default)]
    id: Option<i32>,
    #[serde(default)]
    group_id: Option<i32>,
    #[serde(default)]
    group_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<ResponseStatusJson> for ResponseStatus {
    fn from(value: ResponseStatusJson) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            group_id: value.group_id.unwrap_or_default(),
            group_name: value.group_name.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
        }
    }
}

impl From<ResponseMessageJson> for ResponseMessage {
    fn from(value: ResponseMessageJson) -> Self {
        Self {
            message_id: value.message_id.unwrap_or_default(),
            to: value.to.unwrap_or_default(),
            status: value.status.map(Into::into).unwrap_or_default(),
            sms_count: value.sms_count.unwrap_or_default(),
        }
    }
}

pub fn encode_single_message_json(message: &Message) -> Result<String, serde_json::Error> {
    serde_json::to_string(&MessageJson::from(message))
}

pub fn encode_bulk_message_json(bulk: &BulkMessage) -> Result<String, serde_json::Error> {
    let body = BulkMessageJson {
        bulk_id: non_empty(bulk.bulk_id.as_deref()),
        messages: bulk.messages.iter().map(Into::into).collect(),
    };
    serde_json::to_string(&body)
}

pub fn decode_send_json_response(json: &str) -> Result<Response, TransportError> {
    let parsed: ResponseJson = serde_json::from_str(json)?;

    Ok(Response {
        bulk_id: parsed.bulk_id.filter(|id| !id.is_empty()),
        messages: parsed
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}
