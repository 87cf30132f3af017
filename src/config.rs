//! Validator configuration
//!
//! [`ValidatorConfig`] is the immutable family-acceptance policy of an
//! [`IpAddressValidator`](crate::IpAddressValidator). A configuration that
//! accepts neither family cannot be constructed.
//!
//! # Examples
//!
//! ```
//! use argcheck::{AddressFamily, ValidatorConfig};
//!
//! let config = ValidatorConfig::new(true, false).unwrap();
//! assert!(config.accepts(AddressFamily::Ipv4));
//! assert!(!config.accepts(AddressFamily::Ipv6));
//!
//! assert!(ValidatorConfig::new(false, false).is_err());
//! ```

use std::fmt;

use crate::family::AddressFamily;

/// Which address families a validator accepts.
///
/// At least one of the two flags is always `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatorConfig {
    accept_ipv4: bool,
    accept_ipv6: bool,
}

impl ValidatorConfig {
    /// Create a configuration, failing if both families are disabled.
    pub fn new(accept_ipv4: bool, accept_ipv6: bool) -> Result<Self, ConfigurationError> {
        if !(accept_ipv4 || accept_ipv6) {
            return Err(ConfigurationError);
        }
        Ok(Self {
            accept_ipv4,
            accept_ipv6,
        })
    }

    /// Accept both IPv4 and IPv6 literals.
    pub const fn both() -> Self {
        Self {
            accept_ipv4: true,
            accept_ipv6: true,
        }
    }

    /// Accept IPv4 literals only.
    pub const fn ipv4_only() -> Self {
        Self {
            accept_ipv4: true,
            accept_ipv6: false,
        }
    }

    /// Accept IPv6 literals only.
    pub const fn ipv6_only() -> Self {
        Self {
            accept_ipv4: false,
            accept_ipv6: true,
        }
    }

    /// Whether IPv4 literals are accepted.
    #[inline]
    pub fn accept_ipv4(&self) -> bool {
        self.accept_ipv4
    }

    /// Whether IPv6 literals are accepted.
    #[inline]
    pub fn accept_ipv6(&self) -> bool {
        self.accept_ipv6
    }

    /// Whether literals of `family` are accepted.
    #[inline]
    pub fn accepts(&self, family: AddressFamily) -> bool {
        match family {
            AddressFamily::Ipv4 => self.accept_ipv4,
            AddressFamily::Ipv6 => self.accept_ipv6,
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::both()
    }
}

/// Error returned when a configuration would accept no address family.
///
/// This is a setup-time programmer error, raised when the validator is
/// built, never while validating a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationError;

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "One or both of the acceptIPv4Addresses and acceptIPv6Addresses \
             arguments must have a value of 'true'.",
        )
    }
}

impl std::error::Error for ConfigurationError {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ValidatorConfig;

    #[derive(Serialize, Deserialize)]
    struct RawConfig {
        #[serde(default = "default_accept")]
        accept_ipv4: bool,
        #[serde(default = "default_accept")]
        accept_ipv6: bool,
    }

    fn default_accept() -> bool {
        true
    }

    impl Serialize for ValidatorConfig {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawConfig {
                accept_ipv4: self.accept_ipv4,
                accept_ipv6: self.accept_ipv6,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ValidatorConfig {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawConfig::deserialize(deserializer)?;
            ValidatorConfig::new(raw.accept_ipv4, raw.accept_ipv6)
                .map_err(serde::de::Error::custom)
        }
    }
}
