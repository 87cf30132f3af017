//! Argument value validators
//!
//! An argument framework calls a validator once per value occurrence, after
//! matching the value to an argument and before accepting it. Validators are
//! stateless with respect to the values they see, so one instance can be
//! shared by any number of threads.
//!
//! # Example
//!
//! ```rust
//! use argcheck::prelude::*;
//!
//! let validators: Vec<Box<dyn ArgumentValueValidator>> = vec![
//!     Box::new(IpAddressValidator::new()),
//!     Box::new(|argument: &dyn Argument, value: &str| {
//!         if value.starts_with("127.") {
//!             Err(ValidationFailure::new(
//!                 value,
//!                 argument.identifier_string(),
//!                 FailureKind::MalformedAddress,
//!             ))
//!         } else {
//!             Ok(())
//!         }
//!     }),
//! ];
//!
//! let arg = ArgumentId::long("listen");
//! assert!(validators.iter().all(|v| v.validate(&arg, "10.0.0.1").is_ok()));
//! assert!(validators.iter().any(|v| v.validate(&arg, "127.0.0.1").is_err()));
//! ```

mod ip_address;

pub use ip_address::IpAddressValidator;

use crate::argument::Argument;
use crate::error::ValidationFailure;

/// A rule that checks a single argument value.
pub trait ArgumentValueValidator {
    /// Validate `value`, supplied for `argument`.
    ///
    /// `argument` is only used to name the argument in failures.
    fn validate(&self, argument: &dyn Argument, value: &str) -> Result<(), ValidationFailure>;
}

// Blanket impl for closures
impl<F> ArgumentValueValidator for F
where
    F: Fn(&dyn Argument, &str) -> Result<(), ValidationFailure>,
{
    #[inline]
    fn validate(&self, argument: &dyn Argument, value: &str) -> Result<(), ValidationFailure> {
        self(argument, value)
    }
}
