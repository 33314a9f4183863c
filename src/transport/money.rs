use serde::Deserialize;
use serde::de::Error as DeError;

use crate::domain::Amount;

/// Monetary value sent by Infobip as either a JSON number or a JSON string.
///
/// Numbers are parsed from the raw JSON token so they never pass through `f64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportAmount(Amount);

impl TransportAmount {
    pub fn into_amount(self) -> Amount {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        let text = match token.as_bytes().first().copied() {
            Some(b'"') => serde_json::from_str::<String>(token).map_err(D::Error::custom)?,
            Some(b'-' | b'0'..=b'9') => token.to_owned(),
            _ => {
                return Err(D::Error::custom(
                    "expected amount to be a JSON string or number",
                ));
            }
        };

        text.parse::<Amount>()
            .map(Self)
            .map_err(|err| D::Error::custom(format!("invalid decimal amount {text:?}: {err}")))
    }
}
