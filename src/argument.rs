//! Argument references passed to validators
//!
//! A validator never owns argument state. The argument framework hands it a
//! reference to the argument being processed so that failure messages can
//! name the option the bad value was supplied for.
//!
//! # Examples
//!
//! ```
//! use argcheck::{Argument, ArgumentId};
//!
//! let arg = ArgumentId::new(Some('a'), Some("address"));
//! assert_eq!(arg.identifier_string(), "--address");
//!
//! let short_only = ArgumentId::short('a');
//! assert_eq!(short_only.identifier_string(), "-a");
//! ```

use std::fmt;

/// An argument that values are being validated for.
///
/// Implemented by the argument framework's own argument type. The only thing
/// a validator asks of it is the identifier used in diagnostics.
pub trait Argument {
    /// The identifier used to refer to this argument in messages,
    /// for example `--address` or `-a`.
    fn identifier_string(&self) -> String;
}

impl Argument for str {
    fn identifier_string(&self) -> String {
        self.to_string()
    }
}

impl Argument for String {
    fn identifier_string(&self) -> String {
        self.clone()
    }
}

impl<A: Argument + ?Sized> Argument for &A {
    fn identifier_string(&self) -> String {
        (**self).identifier_string()
    }
}

/// A minimal argument identity: an optional short and an optional long name.
///
/// The long form is preferred in diagnostics, falling back to the short form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgumentId {
    short: Option<char>,
    long: Option<String>,
}

impl ArgumentId {
    /// Create an identity from optional short and long names.
    ///
    /// Leading dashes on the long name are stripped, so `"address"` and
    /// `"--address"` are equivalent. A long name that is empty after
    /// stripping is treated as absent.
    pub fn new(short: Option<char>, long: Option<&str>) -> Self {
        let long = long
            .map(|l| l.trim_start_matches('-'))
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        Self { short, long }
    }

    /// Identity with only a short name (`-a`).
    pub fn short(short: char) -> Self {
        Self::new(Some(short), None)
    }

    /// Identity with only a long name (`--address`).
    pub fn long(long: &str) -> Self {
        Self::new(None, Some(long))
    }

    /// The short name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The long name without leading dashes, if any.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }
}

impl Argument for ArgumentId {
    fn identifier_string(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{}", long),
            (None, Some(short)) => format!("-{}", short),
            // Nameless arguments are positional.
            (None, None) => "{unnamed}".to_string(),
        }
    }
}

impl fmt::Display for ArgumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier_string())
    }
}
