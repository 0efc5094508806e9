//! Radix definitions and digit-string conversion

use dashu_int::UBig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a radix name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadixError {
    #[error("unknown radix '{0}' (expected binary, octal, decimal or hexadecimal)")]
    Unknown(String),
}

/// Supported numeral bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Decimal, Radix::Binary, Radix::Octal, Radix::Hexadecimal];

    /// Numeric base
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }

    pub fn from_value(base: u32) -> Option<Self> {
        match base {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// True if every character of `digits` belongs to this radix's alphabet.
    /// The empty string is accepted.
    pub fn accepts(self, digits: &str) -> bool {
        digits.chars().all(|c| match self {
            Radix::Binary => matches!(c, '0' | '1'),
            Radix::Octal => matches!(c, '0'..='7'),
            Radix::Decimal => c.is_ascii_digit(),
            Radix::Hexadecimal => c.is_ascii_hexdigit(),
        })
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Radix {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(Radix::Binary),
            "octal" | "oct" | "8" => Ok(Radix::Octal),
            "decimal" | "dec" | "10" => Ok(Radix::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(Radix::Hexadecimal),
            _ => Err(RadixError::Unknown(s.to_string())),
        }
    }
}

/// Convert a digit string from one radix to another.
///
/// Never fails. A value that is empty or contains digits outside the
/// `from` alphabet comes back unchanged when `from == to`, and as the empty
/// string otherwise. Hex output uses uppercase letters.
pub fn convert(value: &str, from: Radix, to: Radix) -> String {
    if value.is_empty() || !from.accepts(value) {
        return if from == to { value.to_string() } else { String::new() };
    }
    if from == to {
        return value.to_string();
    }

    match UBig::from_str_radix(value, from.value()) {
        Ok(n) => n.in_radix(to.value()).to_string().to_uppercase(),
        Err(_) => String::new(),
    }
}

/// A value rendered in every supported radix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Renderings {
    pub decimal: String,
    pub binary: String,
    pub octal: String,
    pub hexadecimal: String,
}

/// Render `value` (written in `from`) in all four radices at once.
pub fn convert_all(value: &str, from: Radix) -> Renderings {
    Renderings {
        decimal: convert(value, from, Radix::Decimal),
        binary: convert(value, from, Radix::Binary),
        octal: convert(value, from, Radix::Octal),
        hexadecimal: convert(value, from, Radix::Hexadecimal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_decimal() {
        assert_eq!(convert("A", Radix::Hexadecimal, Radix::Decimal), "10");
        assert_eq!(convert("ff", Radix::Hexadecimal, Radix::Decimal), "255");
    }

    #[test]
    fn test_binary_to_decimal() {
        assert_eq!(convert("1010", Radix::Binary, Radix::Decimal), "10");
    }

    #[test]
    fn test_decimal_to_hex_is_uppercase() {
        assert_eq!(convert("255", Radix::Decimal, Radix::Hexadecimal), "FF");
        assert_eq!(convert("48879", Radix::Decimal, Radix::Hexadecimal), "BEEF");
    }

    #[test]
    fn test_octal_round_trip() {
        assert_eq!(convert("64", Radix::Decimal, Radix::Octal), "100");
        assert_eq!(convert("100", Radix::Octal, Radix::Binary), "1000000");
    }

    #[test]
    fn test_empty_maps_to_empty() {
        for from in Radix::ALL {
            for to in Radix::ALL {
                assert_eq!(convert("", from, to), "");
            }
        }
    }

    #[test]
    fn test_invalid_digit_gives_empty() {
        assert_eq!(convert("G", Radix::Hexadecimal, Radix::Decimal), "");
        assert_eq!(convert("102", Radix::Binary, Radix::Decimal), "");
        assert_eq!(convert("8", Radix::Octal, Radix::Hexadecimal), "");
    }

    #[test]
    fn test_invalid_same_radix_is_unchanged() {
        assert_eq!(convert("G", Radix::Hexadecimal, Radix::Hexadecimal), "G");
        assert_eq!(convert("12x", Radix::Decimal, Radix::Decimal), "12x");
    }

    #[test]
    fn test_same_radix_is_not_reformatted() {
        assert_eq!(convert("00ff", Radix::Hexadecimal, Radix::Hexadecimal), "00ff");
    }

    #[test]
    fn test_rejects_sign_fraction_and_whitespace() {
        assert_eq!(convert("-5", Radix::Decimal, Radix::Binary), "");
        assert_eq!(convert("1.5", Radix::Decimal, Radix::Binary), "");
        assert_eq!(convert(" 5", Radix::Decimal, Radix::Binary), "");
        assert_eq!(convert("5 ", Radix::Decimal, Radix::Binary), "");
    }

    #[test]
    fn test_leading_zeros_are_dropped() {
        assert_eq!(convert("0010", Radix::Binary, Radix::Decimal), "2");
        assert_eq!(convert("000", Radix::Decimal, Radix::Hexadecimal), "0");
    }

    #[test]
    fn test_decimal_hex_round_trip() {
        let samples = ["0", "1", "9", "10", "255", "65535", "4294967296", "123456789012345678901234567890"];
        for v in samples {
            let hex = convert(v, Radix::Decimal, Radix::Hexadecimal);
            assert_eq!(convert(&hex, Radix::Hexadecimal, Radix::Decimal), v, "via {}", hex);
        }
    }

    #[test]
    fn test_beyond_u64_is_exact() {
        // 2^64
        assert_eq!(convert("18446744073709551616", Radix::Decimal, Radix::Hexadecimal), "10000000000000000");
    }

    #[test]
    fn test_convert_all() {
        let r = convert_all("10", Radix::Decimal);
        assert_eq!(r.binary, "1010");
        assert_eq!(r.octal, "12");
        assert_eq!(r.hexadecimal, "A");
        assert_eq!(r.decimal, "10");
    }

    #[test]
    fn test_parse_radix_names() {
        assert_eq!("Hexadecimal".parse::<Radix>(), Ok(Radix::Hexadecimal));
        assert_eq!("2".parse::<Radix>(), Ok(Radix::Binary));
        assert_eq!(" oct ".parse::<Radix>(), Ok(Radix::Octal));
        assert!(matches!("base36".parse::<Radix>(), Err(RadixError::Unknown(_))));
    }

    #[test]
    fn test_radix_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Radix::Hexadecimal).unwrap(), "\"hexadecimal\"");
    }
}
