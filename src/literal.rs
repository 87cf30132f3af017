//! Address literal parsing
//!
//! The validator delegates structural correctness to a [`LiteralParser`].
//! A parser only ever interprets its input as a literal of the requested
//! family. It must never fall back to name resolution, touch the network, or
//! block.
//!
//! [`StdLiteralParser`] is the default and is backed by the standard
//! library's `FromStr` impls for [`Ipv4Addr`] and [`Ipv6Addr`], which are
//! purely syntactic.
//!
//! # Examples
//!
//! ```
//! use argcheck::{AddressFamily, LiteralParser, StdLiteralParser};
//!
//! let parser = StdLiteralParser;
//! assert!(parser.parse_literal("10.0.0.1", AddressFamily::Ipv4).is_ok());
//! assert!(parser.parse_literal("10.0.0.256", AddressFamily::Ipv4).is_err());
//! assert!(parser.parse_literal("fe80::1", AddressFamily::Ipv6).is_ok());
//! ```

use std::fmt;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr};

use crate::family::AddressFamily;

/// A parser for address literals of a given family.
///
/// Implementations must be side-effect free: no DNS, no filesystem, no
/// sockets.
pub trait LiteralParser {
    /// Parse `value` as a literal of `family`.
    ///
    /// On success the returned address belongs to `family`.
    fn parse_literal(&self, value: &str, family: AddressFamily) -> Result<IpAddr, LiteralError>;
}

impl<P: LiteralParser + ?Sized> LiteralParser for &P {
    fn parse_literal(&self, value: &str, family: AddressFamily) -> Result<IpAddr, LiteralError> {
        (**self).parse_literal(value, family)
    }
}

/// Literal parser backed by `std::net`.
///
/// Accepts exactly the forms the standard library does: four decimal octets
/// without leading zeros for IPv4, and RFC 4291 text forms (including `::`
/// compression and an embedded dotted quad) for IPv6. Zone identifiers are
/// not accepted.
///
/// This is stricter than the classic `inet_aton` rules used by many resolver
/// libraries: shorthand IPv4 forms such as `127.1` or `10.1.2`, and octets
/// with leading zeros such as `010.0.0.1`, are rejected rather than expanded
/// or read as octal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdLiteralParser;

impl LiteralParser for StdLiteralParser {
    fn parse_literal(&self, value: &str, family: AddressFamily) -> Result<IpAddr, LiteralError> {
        let parsed = match family {
            AddressFamily::Ipv4 => value.parse::<Ipv4Addr>().map(IpAddr::V4),
            AddressFamily::Ipv6 => value.parse::<Ipv6Addr>().map(IpAddr::V6),
        };
        parsed.map_err(|source| LiteralError::from((family, source)))
    }
}

/// Error returned when a value is not a correct literal of the requested family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    family: AddressFamily,
    reason: String,
}

impl LiteralError {
    /// Create a literal error for `family` with a human-readable reason.
    pub fn new(family: AddressFamily, reason: impl Into<String>) -> Self {
        Self {
            family,
            reason: reason.into(),
        }
    }

    /// The family the value was parsed as.
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Why the parser rejected the value.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<(AddressFamily, AddrParseError)> for LiteralError {
    fn from((family, err): (AddressFamily, AddrParseError)) -> Self {
        LiteralError::new(family, err.to_string())
    }
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid {} literal: {}", self.family, self.reason)
    }
}

impl std::error::Error for LiteralError {}
