//! Validation failures
//!
//! Every rejected value produces a [`ValidationFailure`]: the value, the
//! identifier of the argument it was supplied for, and a [`FailureKind`]
//! the caller can branch on.
//!
//! # Examples
//!
//! ```
//! use argcheck::{ArgumentId, FailureKind, IpAddressValidator};
//!
//! let validator = IpAddressValidator::new();
//! let err = validator
//!     .parse(&ArgumentId::long("address"), "1.2.3.4g")
//!     .unwrap_err();
//!
//! assert_eq!(err.kind(), &FailureKind::IllegalIpv4Character('g'));
//! assert_eq!(err.value(), "1.2.3.4g");
//! assert_eq!(err.argument(), "--address");
//! ```

use std::fmt;

use crate::family::AddressFamily;
use crate::literal::LiteralError;

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The value has no address separator, or the literal parser rejected it.
    MalformedAddress,
    /// A colon-bearing value contains a character not allowed in IPv6 literals.
    IllegalIpv6Character(char),
    /// A dot-bearing value without colons contains a non-digit character.
    IllegalIpv4Character(char),
    /// A well-formed IPv4 literal was given but IPv4 is not accepted.
    Ipv4NotAccepted,
    /// A well-formed IPv6 literal was given but IPv6 is not accepted.
    Ipv6NotAccepted,
}

impl FailureKind {
    /// The offending character for character-level failures.
    pub fn illegal_char(&self) -> Option<char> {
        match self {
            FailureKind::IllegalIpv6Character(c) | FailureKind::IllegalIpv4Character(c) => Some(*c),
            _ => None,
        }
    }

    /// The character-level failure for `family`.
    pub(crate) fn illegal_char_for(family: AddressFamily, c: char) -> Self {
        match family {
            AddressFamily::Ipv4 => FailureKind::IllegalIpv4Character(c),
            AddressFamily::Ipv6 => FailureKind::IllegalIpv6Character(c),
        }
    }

    /// The policy failure for `family`.
    pub(crate) fn not_accepted(family: AddressFamily) -> Self {
        match family {
            AddressFamily::Ipv4 => FailureKind::Ipv4NotAccepted,
            AddressFamily::Ipv6 => FailureKind::Ipv6NotAccepted,
        }
    }
}

/// A value rejected by a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    value: String,
    argument: String,
    kind: FailureKind,
    source: Option<LiteralError>,
}

impl ValidationFailure {
    /// Create a failure for `value` supplied to `argument`.
    pub fn new(value: impl Into<String>, argument: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            value: value.into(),
            argument: argument.into(),
            kind,
            source: None,
        }
    }

    /// Attach the literal parser error that caused this failure.
    pub fn with_source(mut self, source: LiteralError) -> Self {
        self.source = Some(source);
        self
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Identifier of the argument the value was supplied for.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Why the value was rejected.
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// The literal parser error, if the parser rejected the value.
    pub fn literal_error(&self) -> Option<&LiteralError> {
        self.source.as_ref()
    }

    /// Returns true if the value was not a well-formed address.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, FailureKind::MalformedAddress)
    }

    /// Returns true if the value contained an illegal character.
    pub fn is_illegal_char(&self) -> bool {
        self.kind.illegal_char().is_some()
    }

    /// Returns true if the value was well formed but its family is not accepted.
    pub fn is_not_accepted(&self) -> bool {
        matches!(
            self.kind,
            FailureKind::Ipv4NotAccepted | FailureKind::Ipv6NotAccepted
        )
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, argument) = (&self.value, &self.argument);
        match &self.kind {
            FailureKind::MalformedAddress => write!(
                f,
                "The provided value '{}' for argument {} cannot be parsed as a valid \
                 IPv4 or IPv6 address.",
                value, argument
            ),
            FailureKind::IllegalIpv6Character(c) => write!(
                f,
                "The provided value '{}' for argument {} is not a valid IPv6 address \
                 because it contains illegal character '{}'.",
                value, argument, c
            ),
            FailureKind::IllegalIpv4Character(c) => write!(
                f,
                "The provided value '{}' for argument {} is not a valid IPv4 address \
                 because it contains illegal character '{}'.",
                value, argument, c
            ),
            FailureKind::Ipv4NotAccepted => write!(
                f,
                "The provided value '{}' for argument {} is an IPv4 address, but only \
                 IPv6 addresses are accepted.",
                value, argument
            ),
            FailureKind::Ipv6NotAccepted => write!(
                f,
                "The provided value '{}' for argument {} is an IPv6 address, but only \
                 IPv4 addresses are accepted.",
                value, argument
            ),
        }
    }
}

impl std::error::Error for ValidationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
