//! # argcheck
//!
//! Argument value validators for command-line argument parsers.
//!
//! An argument framework matches each value on the command line to a named
//! argument, then hands the pair to the validators bound to that argument
//! before accepting the value. This crate provides that validator contract
//! ([`ArgumentValueValidator`]) and an IP address validator
//! ([`IpAddressValidator`]) that accepts IPv4 and/or IPv6 literals according
//! to an immutable [`ValidatorConfig`].
//!
//! Values are only ever parsed as literals. Hostnames are rejected, never
//! resolved.
//!
//! ## Quick Example
//!
//! ```rust
//! use argcheck::prelude::*;
//!
//! let validator = IpAddressValidator::with_families(true, false).unwrap();
//! let arg = ArgumentId::new(Some('b'), Some("bind-address"));
//!
//! assert!(validator.validate(&arg, "192.168.1.1").is_ok());
//!
//! match validator.validate(&arg, "::1") {
//!     Err(failure) => {
//!         assert_eq!(failure.kind(), &FailureKind::Ipv6NotAccepted);
//!         println!("{}", failure);
//!     }
//!     Ok(()) => unreachable!(),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug` events for rejected literals and `trace` events
//!   for accepted values.
//! - `serde`: load a [`ValidatorConfig`] from configuration files.
//! - `proptest`: strategies for generating address literals
//!   ([`testing::strategies`](crate::testing)).

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod argument;
pub mod config;
pub mod error;
pub mod family;
pub mod literal;
pub mod testing;
pub mod validator;

// Re-exports
pub use argument::{Argument, ArgumentId};
pub use config::{ConfigurationError, ValidatorConfig};
pub use error::{FailureKind, ValidationFailure};
pub use family::AddressFamily;
pub use literal::{LiteralError, LiteralParser, StdLiteralParser};
pub use validator::{ArgumentValueValidator, IpAddressValidator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::argument::{Argument, ArgumentId};
    pub use crate::config::{ConfigurationError, ValidatorConfig};
    pub use crate::error::{FailureKind, ValidationFailure};
    pub use crate::family::AddressFamily;
    pub use crate::validator::{ArgumentValueValidator, IpAddressValidator};
}
