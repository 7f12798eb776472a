//! # Ether Units
//!
//! Decimal <-> integer conversion for the chain's native currency, plus the
//! `0x`-prefixed hex quantities JSON-RPC uses on the wire.
//!
//! Amounts are carried as `u128` wei. The full ether supply fits with room to
//! spare, so no big-integer crate is needed.
//!
//! ```rust
//! use shared::units::{format_ether, parse_ether};
//!
//! let wei = parse_ether("1.5").unwrap();
//! assert_eq!(wei, 1_500_000_000_000_000_000);
//! assert_eq!(format_ether(wei), "1.5");
//! ```

use thiserror::Error;

/// Decimals of the native currency (wei per ether = 10^18)
pub const ETHER_DECIMALS: u32 = 18;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a valid decimal amount")]
    InvalidNumber(String),

    #[error("amount has more than {max} decimal places")]
    TooManyDecimals { max: u32 },

    #[error("amount is too large")]
    Overflow,

    #[error("'{0}' is not a valid hex quantity")]
    InvalidQuantity(String),
}

/// Parse a decimal string into the smallest unit with `decimals` places.
///
/// Accepts `"1"`, `"1.5"`, `".5"` and `"1."`. Signs, exponents and
/// separators are rejected, as are more fractional digits than `decimals`.
pub fn parse_units(value: &str, decimals: u32) -> Result<u128, UnitsError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(UnitsError::InvalidNumber(value.to_string()));
    }
    if fraction.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals { max: decimals });
    }

    let scale = 10u128.checked_pow(decimals).ok_or(UnitsError::Overflow)?;

    // Only overflow can fail here, the digits were checked above
    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| UnitsError::Overflow)?
    };
    let fraction: u128 = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        padded.parse().map_err(|_| UnitsError::Overflow)?
    };

    whole
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or(UnitsError::Overflow)
}

/// Format an integer amount with `decimals` places, dropping trailing zeros.
pub fn format_units(value: u128, decimals: u32) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;

    let (whole, fraction) = if digits.len() > decimals {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        (whole.to_string(), fraction.to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = decimals))
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Parse an ether amount (e.g. `"0.1"`) into wei.
pub fn parse_ether(value: &str) -> Result<u128, UnitsError> {
    parse_units(value, ETHER_DECIMALS)
}

/// Format wei as an ether decimal string (e.g. `"0.1"`).
pub fn format_ether(wei: u128) -> String {
    format_units(wei, ETHER_DECIMALS)
}

/// Parse a JSON-RPC hex quantity such as `"0x2386f26fc10000"`.
pub fn parse_quantity(value: &str) -> Result<u128, UnitsError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| UnitsError::InvalidQuantity(value.to_string()))?;

    u128::from_str_radix(digits, 16).map_err(|_| UnitsError::InvalidQuantity(value.to_string()))
}

/// Encode a JSON-RPC hex quantity (no leading zeros, `"0x0"` for zero).
pub fn to_quantity(value: u128) -> String {
    format!("{:#x}", value)
}
