use serde::Deserialize;

use super::TransportError;
use super::money::TransportAmount;
use crate::domain::{SentSmsError, SentSmsPrice, SentSmsReport, SentSmsStatus, SmsReportResponse};

/// Query parameter carrying the message id.
pub const MESSAGE_ID_PARAM: &str = "messageId";

#[derive(Debug, Clone, Deserialize)]
struct SmsReportJsonResponse {
    #[serde(default)]
    results: Option<Vec<SentSmsReportJson>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentSmsReportJson {
    #[serde(default)]
    bulk_id: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    sent_at: Option<String>,
    #[serde(default)]
    done_at: Option<String>,
    #[serde(default)]
    sms_count: Option<u32>,
    #[serde(default)]
    mcc_mnc: Option<String>,
    #[serde(default)]
    price: Option<SentSmsPriceJson>,
    #[serde(default)]
    status: Option<SentSmsStatusJson>,
    #[serde(default)]
    error: Option<SentSmsErrorJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentSmsPriceJson {
    #[serde(default)]
    price_per_message: Option<TransportAmount>,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentSmsStatusJson {
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
    #[serde(default)]
    action: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentSmsErrorJson {
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
    #[serde(default)]
    permanent: Option<bool>,
}

impl From<SentSmsPriceJson> for SentSmsPrice {
    fn from(value: SentSmsPriceJson) -> Self {
        Self {
            price_per_message: value
                .price_per_message
                .map(TransportAmount::into_amount)
                .unwrap_or_default(),
            currency: value.currency.unwrap_or_default(),
        }
    }
}

impl From<SentSmsStatusJson> for SentSmsStatus {
    fn from(value: SentSmsStatusJson) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            group_id: value.group_id.unwrap_or_default(),
            group_name: value.group_name.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            action: value.action.filter(|action| !action.is_empty()),
        }
    }
}

impl From<SentSmsErrorJson> for SentSmsError {
    fn from(value: SentSmsErrorJson) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            group_id: value.group_id.unwrap_or_default(),
            group_name: value.group_name.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            permanent: value.permanent.unwrap_or_default(),
        }
    }
}

impl From<SentSmsReportJson> for SentSmsReport {
    fn from(value: SentSmsReportJson) -> Self {
        Self {
            bulk_id: value.bulk_id.filter(|id| !id.is_empty()),
            message_id: value.message_id.unwrap_or_default(),
            to: value.to.unwrap_or_default(),
            sent_at: value.sent_at.unwrap_or_default(),
            done_at: value.done_at.unwrap_or_default(),
            sms_count: value.sms_count.unwrap_or_default(),
            mcc_mnc: value.mcc_mnc.filter(|mcc_mnc| !mcc_mnc.is_empty()),
            price: value.price.map(Into::into).unwrap_or_default(),
            status: value.status.map(Into::into).unwrap_or_default(),
            error: value.error.map(Into::into),
        }
    }
}

pub fn encode_delivery_report_query(message_id: &str) -> Vec<(String, String)> {
    vec![(MESSAGE_ID_PARAM.to_owned(), message_id.to_owned())]
}

pub fn decode_delivery_report_json_response(
    json: &str,
) -> Result<SmsReportResponse, TransportError> {
    let parsed: SmsReportJsonResponse = serde_json::from_str(json)?;

    Ok(SmsReportResponse {
        results: parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}
