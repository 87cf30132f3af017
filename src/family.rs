//! Address families and lexical classification

use std::fmt;
use std::net::IpAddr;

/// One of the two address kinds a validator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// Dotted-quad IPv4 literals such as `192.168.1.1`.
    Ipv4,
    /// Colon-separated IPv6 literals such as `::1` or `::ffff:10.0.0.1`.
    Ipv6,
}

impl AddressFamily {
    /// Classify a value by a single lexical scan.
    ///
    /// A colon anywhere makes the value an IPv6 candidate, including
    /// IPv4-mapped literals. Otherwise a dot makes it an IPv4 candidate.
    /// Values with neither separator cannot be either family.
    ///
    /// # Examples
    ///
    /// ```
    /// use argcheck::AddressFamily;
    ///
    /// assert_eq!(AddressFamily::classify("10.0.0.1"), Some(AddressFamily::Ipv4));
    /// assert_eq!(AddressFamily::classify("::ffff:10.0.0.1"), Some(AddressFamily::Ipv6));
    /// assert_eq!(AddressFamily::classify("localhost"), None);
    /// ```
    pub fn classify(value: &str) -> Option<Self> {
        if value.contains(':') {
            Some(AddressFamily::Ipv6)
        } else if value.contains('.') {
            Some(AddressFamily::Ipv4)
        } else {
            None
        }
    }

    /// Whether `c` may appear in a literal of this family.
    ///
    /// IPv6 candidates allow dots because the last 32 bits may be written
    /// in dotted-quad form.
    #[inline]
    pub fn allows_char(self, c: char) -> bool {
        match self {
            AddressFamily::Ipv4 => c == '.' || c.is_ascii_digit(),
            AddressFamily::Ipv6 => c == ':' || c == '.' || c.is_ascii_hexdigit(),
        }
    }

    /// The first character of `value` not allowed in this family, if any.
    pub fn first_illegal_char(self, value: &str) -> Option<char> {
        value.chars().find(|&c| !self.allows_char(c))
    }

    /// The family of a parsed address.
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => f.write_str("IPv4"),
            AddressFamily::Ipv6 => f.write_str("IPv6"),
        }
    }
}
