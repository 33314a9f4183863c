use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Monetary amount reported by Infobip (e.g. `pricePerMessage`).
///
/// Backed by [`Decimal`] so values never pass through a float.
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn into_decimal(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    /// Parses plain (`0.01`) and scientific (`1e-2`) notation.
    ///
    /// Values that [`Decimal`] cannot hold exactly are rejected, never rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                parse_scientific_exact(mantissa, exponent).map(Self)
            }
            None => Decimal::from_str_exact(s).map(Self),
        }
    }
}

fn parse_scientific_exact(mantissa: &str, exponent: &str) -> Result<Decimal, rust_decimal::Error> {
    let mantissa = Decimal::from_str_exact(mantissa)?;
    let exponent = exponent.parse::<i64>().map_err(|_| {
        rust_decimal::Error::ErrorString(format!("invalid exponent: {exponent}"))
    })?;

    let digits = mantissa.mantissa();
    let scale = i64::from(mantissa.scale())
        .checked_sub(exponent)
        .ok_or(rust_decimal::Error::ExceedsMaximumPossibleValue)?;
    if scale >= 0 {
        let scale = u32::try_from(scale).unwrap_or(u32::MAX);
        return Decimal::try_from_i128_with_scale(digits, scale);
    }

    // Negative scale: shift the digits left and keep the integer exact.
    u32::try_from(scale.unsigned_abs())
        .ok()
        .and_then(|shift| 10i128.checked_pow(shift))
        .and_then(|factor| digits.checked_mul(factor))
        .ok_or(rust_decimal::Error::ExceedsMaximumPossibleValue)
        .and_then(|digits| Decimal::try_from_i128_with_scale(digits, 0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Documented Infobip message status groups (`status.groupId`).
pub enum KnownStatusGroup {
    Accepted,
    Pending,
    Undeliverable,
    Delivered,
    Expired,
    Rejected,
}

impl KnownStatusGroup {
    pub fn from_id(id: i32) -> Option<Self> {
        Some(match id {
            0 => Self::Accepted,
            1 => Self::Pending,
            2 => Self::Undeliverable,
            3 => Self::Delivered,
            4 => Self::Expired,
            5 => Self::Rejected,
            _ => return None,
        })
    }

    /// `true` for groups after which the status will not change again.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            Self::Undeliverable | Self::Delivered | Self::Expired | Self::Rejected
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Documented Infobip error groups (`error.groupId`).
pub enum KnownErrorGroup {
    Ok,
    HandsetErrors,
    UserErrors,
    OperatorErrors,
}

impl KnownErrorGroup {
    pub fn from_id(id: i32) -> Option<Self> {
        Some(match id {
            0 => Self::Ok,
            1 => Self::HandsetErrors,
            2 => Self::UserErrors,
            3 => Self::OperatorErrors,
            _ => return None,
        })
    }
}
