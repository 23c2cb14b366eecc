use std::fmt;

/// Error that possible during payload decoding
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParserError {
    /// UBX checksum did not match, reported but never fatal
    InvalidChecksum { expect: u16, got: u16 },
    /// Payload is shorter than the fixed part of the message
    BadLength {
        packet: &'static str,
        min: usize,
        got: usize,
    },
    /// Payload length is not one of the lengths the message allows
    UnexpectedLength { packet: &'static str, got: usize },
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::InvalidChecksum { expect, got } => write!(
                f,
                "Not valid packet's checksum, expect {:x}, got {:x}",
                expect, got
            ),
            ParserError::BadLength { packet, min, got } => write!(
                f,
                "Bad Length {} for packet({}), expect at least {}",
                got, packet, min
            ),
            ParserError::UnexpectedLength { packet, got } => {
                write!(f, "Bad Length {} for packet({})", got, packet)
            },
        }
    }
}

impl std::error::Error for ParserError {}

/// Error returned by the command builders before anything is framed
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// Configuration item name not present in the registry
    UnknownConfigItem(String),
    /// "NAME,value" pair without a comma
    MalformedConfigPair(String),
    /// Value does not parse for the item's numeric kind
    InvalidConfigValue { name: String, value: String },
    /// Only UART1 and UART2 have a baud rate
    InvalidPort(u8),
    /// Payload length does not fit the 16-bit length field
    PayloadTooLong(usize),
    /// No poll command is known under this name
    UnknownPoll(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnknownConfigItem(name) => write!(f, "unknown config item {}", name),
            EncodeError::MalformedConfigPair(pair) => {
                write!(f, "config pair {:?} is not in NAME,value form", pair)
            },
            EncodeError::InvalidConfigValue { name, value } => {
                write!(f, "invalid value {:?} for config item {}", value, name)
            },
            EncodeError::InvalidPort(port) => {
                write!(f, "invalid port {}, only UART1 and UART2 are supported", port)
            },
            EncodeError::PayloadTooLong(len) => {
                write!(f, "payload of {} bytes does not fit in a UBX frame", len)
            },
            EncodeError::UnknownPoll(name) => write!(f, "no poll command named {}", name),
        }
    }
}

impl std::error::Error for EncodeError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateTimeError {
    InvalidDate,
    InvalidTime,
    InvalidNanoseconds,
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeError::InvalidDate => f.write_str("invalid date"),
            DateTimeError::InvalidTime => f.write_str("invalid time"),
            DateTimeError::InvalidNanoseconds => f.write_str("invalid nanoseconds"),
        }
    }
}

impl std::error::Error for DateTimeError {}
