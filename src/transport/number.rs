use serde::Deserialize;

use super::{TransportError, non_empty};
use crate::domain::{Number, SearchNumberParams, SearchNumberResponse};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchNumberJsonResponse {
    #[serde(default)]
    number_count: Option<u32>,
    #[serde(default)]
    numbers: Option<Vec<NumberJson>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NumberJson {
    #[serde(default)]
    number_key: Option<String>,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default, rename = "type")]
    number_type: Option<String>,
    #[serde(default)]
    capabilities: Option<Vec<String>>,
}

impl From<NumberJson> for Number {
    fn from(value: NumberJson) -> Self {
        Self {
            number_key: value.number_key.unwrap_or_default(),
            number: value.number.unwrap_or_default(),
            country: value.country.unwrap_or_default(),
            number_type: value.number_type.unwrap_or_default(),
            capabilities: value.capabilities.unwrap_or_default(),
        }
    }
}

pub fn encode_search_number_query(params: &SearchNumberParams) -> Vec<(String, String)> {
    let mut query = Vec::<(String, String)>::new();

    if let Some(number) = non_empty(params.number.as_deref()) {
        query.push(("number".to_owned(), number.to_owned()));
    }
    if let Some(capabilities) = non_empty(params.capabilities.as_deref()) {
        query.push(("capabilities".to_owned(), capabilities.to_owned()));
    }
    if let Some(country) = non_empty(params.country.as_deref()) {
        query.push(("country".to_owned(), country.to_owned()));
    }
    if let Some(limit) = params.limit.filter(|limit| *limit > 0) {
        query.push(("limit".to_owned(), limit.to_string()));
    }
    if let Some(page) = params.page.filter(|page| *page > 0) {
        query.push(("page".to_owned(), page.to_string()));
    }

    query
}

pub fn decode_search_number_json_response(
    json: &str,
) -> Result<SearchNumberResponse, TransportError> {
    let parsed: SearchNumberJsonResponse = serde_json::from_str(json)?;

    Ok(SearchNumberResponse {
        number_count: parsed.number_count.unwrap_or_default(),
        numbers: parsed
            .numbers
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}
