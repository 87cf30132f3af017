//! Testing utilities for code that uses argument validators
//!
//! This module provides assertion macros for validation outcomes and, with
//! the `proptest` feature, strategies that generate address literals.
//!
//! # Examples
//!
//! ```rust
//! use argcheck::{assert_accepted, assert_rejected, ArgumentId, FailureKind, IpAddressValidator};
//!
//! let validator = IpAddressValidator::new();
//! let arg = ArgumentId::long("address");
//!
//! assert_accepted!(validator.validate(&arg, "10.0.0.1"));
//! assert_rejected!(validator.validate(&arg, "10.0.0.1g"));
//! assert_rejected!(
//!     validator.validate(&arg, "10.0.0.1g"),
//!     FailureKind::IllegalIpv4Character('g')
//! );
//! ```

/// Assert that a validation outcome is an acceptance.
///
/// Panics with the failure message otherwise.
#[macro_export]
macro_rules! assert_accepted {
    ($outcome:expr) => {
        match $outcome {
            ::std::result::Result::Ok(_) => {}
            ::std::result::Result::Err(failure) => {
                panic!("Expected value to be accepted, got failure: {}", failure);
            }
        }
    };
}

/// Assert that a validation outcome is a failure, optionally of a given kind.
///
/// # Example
///
/// ```rust
/// use argcheck::{assert_rejected, ArgumentId, FailureKind, IpAddressValidator};
///
/// let validator = IpAddressValidator::with_families(true, false).unwrap();
/// assert_rejected!(
///     validator.validate(&ArgumentId::short('a'), "::1"),
///     FailureKind::Ipv6NotAccepted
/// );
/// ```
#[macro_export]
macro_rules! assert_rejected {
    ($outcome:expr) => {
        match $outcome {
            ::std::result::Result::Err(_) => {}
            ::std::result::Result::Ok(v) => {
                panic!("Expected value to be rejected, got acceptance: {:?}", v);
            }
        }
    };
    ($outcome:expr, $kind:expr) => {
        match $outcome {
            ::std::result::Result::Err(failure) => {
                assert_eq!(failure.kind(), &$kind);
            }
            ::std::result::Result::Ok(v) => {
                panic!(
                    "Expected value to be rejected with {:?}, got acceptance: {:?}",
                    $kind, v
                );
            }
        }
    };
}

/// Strategies generating address literals.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    /// Dotted-quad IPv4 literals.
    pub fn ipv4_literal() -> impl Strategy<Value = String> {
        any::<[u8; 4]>().prop_map(|octets| Ipv4Addr::from(octets).to_string())
    }

    /// IPv6 literals in canonical compressed form, upper or lower case.
    pub fn ipv6_literal() -> impl Strategy<Value = String> {
        (any::<[u16; 8]>(), any::<bool>()).prop_map(|(segments, upper)| {
            let text = Ipv6Addr::from(segments).to_string();
            if upper {
                text.to_uppercase()
            } else {
                text
            }
        })
    }

    /// IPv4-mapped IPv6 literals such as `::ffff:10.0.0.1`.
    pub fn ipv4_mapped_literal() -> impl Strategy<Value = String> {
        any::<[u8; 4]>().prop_map(|octets| format!("::ffff:{}", Ipv4Addr::from(octets)))
    }
}
