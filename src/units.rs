//! REC amount denominations
//!
//! Amounts are integers of base units (1 REC = 100,000,000). Formatting is
//! locale-free: no grouping separators, `.` as the decimal point.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{COIN, DECIMAL_PLACES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    #[serde(rename = "REC")]
    Rec,
    #[serde(rename = "mREC")]
    MilliRec,
    #[serde(rename = "uREC")]
    MicroRec,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("empty amount")]
    Empty,
    #[error("more than one decimal point")]
    MultipleDecimalPoints,
    #[error("at most {max} decimal places allowed for {unit}")]
    TooManyDecimals { unit: Unit, max: usize },
    #[error("amount out of range")]
    OutOfRange,
    #[error("invalid digits in amount")]
    InvalidDigits,
}

/// Digit strings longer than this could overflow 63 bits
const MAX_DIGITS: usize = 18;

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Rec, Unit::MilliRec, Unit::MicroRec];

    pub fn name(self) -> &'static str {
        match self {
            Unit::Rec => "REC",
            Unit::MilliRec => "mREC",
            Unit::MicroRec => "μREC",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Unit::Rec => "RoyalEmpireCoins",
            Unit::MilliRec => "Milli-RoyalEmpireCoins (1 / 1,000)",
            Unit::MicroRec => "Micro-RoyalEmpireCoins (1 / 1,000,000)",
        }
    }

    /// Base units per one of this unit
    pub fn factor(self) -> i64 {
        match self {
            Unit::Rec => COIN,
            Unit::MilliRec => COIN / 1_000,
            Unit::MicroRec => COIN / 1_000_000,
        }
    }

    /// Integer digits needed for the maximum money supply
    pub fn amount_digits(self) -> usize {
        match self {
            Unit::Rec => 8,
            Unit::MilliRec => 11,
            Unit::MicroRec => 14,
        }
    }

    pub fn decimals(self) -> usize {
        match self {
            Unit::Rec => DECIMAL_PLACES as usize,
            Unit::MilliRec => 5,
            Unit::MicroRec => 2,
        }
    }

    /// Format `amount` base units, trimming trailing zeros down to two places
    pub fn format(self, amount: i64, plus_sign: bool) -> String {
        let coin = self.factor().unsigned_abs();
        let abs = amount.unsigned_abs();
        let quotient = abs / coin;
        let remainder = abs % coin;

        let mut fraction = format!("{:0width$}", remainder, width = self.decimals());
        while fraction.len() > 2 && fraction.ends_with('0') {
            fraction.pop();
        }

        let sign = if amount < 0 {
            "-"
        } else if plus_sign && amount > 0 {
            "+"
        } else {
            ""
        };
        format!("{sign}{quotient}.{fraction}")
    }

    pub fn format_with_unit(self, amount: i64, plus_sign: bool) -> String {
        format!("{} {}", self.format(amount, plus_sign), self.name())
    }

    /// Parse a decimal string in this unit into base units
    pub fn parse(self, value: &str) -> Result<i64, AmountParseError> {
        if value.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let mut parts = value.split('.');
        let whole = parts.next().unwrap_or_default();
        let decimals = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(AmountParseError::MultipleDecimalPoints);
        }
        if decimals.len() > self.decimals() {
            return Err(AmountParseError::TooManyDecimals {
                unit: self,
                max: self.decimals(),
            });
        }

        let digits = format!("{whole}{decimals:0<width$}", width = self.decimals());
        if digits.len() > MAX_DIGITS {
            return Err(AmountParseError::OutOfRange);
        }
        digits.parse::<i64>().map_err(|_| AmountParseError::InvalidDigits)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REC" | "rec" => Ok(Unit::Rec),
            "mREC" | "mrec" => Ok(Unit::MilliRec),
            "μREC" | "uREC" | "urec" => Ok(Unit::MicroRec),
            _ => Err(format!("unknown unit: {s}")),
        }
    }
}
