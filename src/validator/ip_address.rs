//! IP address literal validator

use std::fmt;
use std::net::IpAddr;

use super::ArgumentValueValidator;
use crate::argument::Argument;
use crate::config::{ConfigurationError, ValidatorConfig};
use crate::error::{FailureKind, ValidationFailure};
use crate::family::AddressFamily;
use crate::literal::{LiteralError, LiteralParser, StdLiteralParser};

/// Validator that accepts IPv4 and/or IPv6 address literals.
///
/// A value is checked in stages, each of which can reject it:
///
/// 1. Classification: a colon makes it an IPv6 candidate, otherwise a dot
///    makes it an IPv4 candidate. Neither is [`FailureKind::MalformedAddress`].
/// 2. Character set: IPv6 candidates may only contain hex digits, `:` and
///    `.`; IPv4 candidates only decimal digits and `.`. The first other
///    character is reported.
/// 3. Structure: the [`LiteralParser`] must accept the value as a literal of
///    the candidate family, otherwise [`FailureKind::MalformedAddress`].
///    An address of the other family from the parser is also malformed.
/// 4. Policy: the family must be accepted by the [`ValidatorConfig`].
///
/// No stage resolves names or performs I/O.
///
/// # Example
///
/// ```rust
/// use argcheck::{ArgumentId, FailureKind, IpAddressValidator};
///
/// let arg = ArgumentId::long("address");
///
/// let validator = IpAddressValidator::new();
/// assert!(validator.validate(&arg, "192.168.1.1").is_ok());
/// assert!(validator.validate(&arg, "::1").is_ok());
///
/// let ipv6_only = IpAddressValidator::with_families(false, true).unwrap();
/// let err = ipv6_only.validate(&arg, "192.168.1.1").unwrap_err();
/// assert_eq!(err.kind(), &FailureKind::Ipv4NotAccepted);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpAddressValidator<P = StdLiteralParser> {
    config: ValidatorConfig,
    parser: P,
}

impl IpAddressValidator {
    /// Create a validator that accepts both IPv4 and IPv6 addresses.
    pub fn new() -> Self {
        Self::from_config(ValidatorConfig::both())
    }

    /// Create a validator accepting the given families.
    ///
    /// Fails if neither family is accepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argcheck::IpAddressValidator;
    ///
    /// assert!(IpAddressValidator::with_families(true, false).is_ok());
    /// assert!(IpAddressValidator::with_families(false, false).is_err());
    /// ```
    pub fn with_families(
        accept_ipv4: bool,
        accept_ipv6: bool,
    ) -> Result<Self, ConfigurationError> {
        ValidatorConfig::new(accept_ipv4, accept_ipv6).map(Self::from_config)
    }

    /// Create a validator from an already-checked configuration.
    pub fn from_config(config: ValidatorConfig) -> Self {
        Self::with_parser(config, StdLiteralParser)
    }
}

impl<P: LiteralParser> IpAddressValidator<P> {
    /// Create a validator that delegates structural checks to `parser`.
    pub fn with_parser(config: ValidatorConfig, parser: P) -> Self {
        Self { config, parser }
    }

    /// The family-acceptance policy.
    pub fn config(&self) -> ValidatorConfig {
        self.config
    }

    /// Whether IPv4 addresses are accepted.
    pub fn accept_ipv4(&self) -> bool {
        self.config.accept_ipv4()
    }

    /// Whether IPv6 addresses are accepted.
    pub fn accept_ipv6(&self) -> bool {
        self.config.accept_ipv6()
    }

    /// Validate `value` and return the parsed address.
    ///
    /// IPv4-mapped IPv6 literals such as `::ffff:10.0.0.1` are IPv6 values:
    /// they are returned as [`IpAddr::V6`] and subject to the IPv6 policy.
    pub fn parse(&self, argument: &dyn Argument, value: &str) -> Result<IpAddr, ValidationFailure> {
        let fail =
            |kind: FailureKind| ValidationFailure::new(value, argument.identifier_string(), kind);

        let family =
            AddressFamily::classify(value).ok_or_else(|| fail(FailureKind::MalformedAddress))?;

        if let Some(c) = family.first_illegal_char(value) {
            return Err(fail(FailureKind::illegal_char_for(family, c)));
        }

        let parsed = self.parser.parse_literal(value, family).and_then(|addr| {
            let parsed_family = AddressFamily::of(&addr);
            if parsed_family == family {
                Ok(addr)
            } else {
                Err(LiteralError::new(
                    family,
                    format!("parser returned an {} address", parsed_family),
                ))
            }
        });

        let addr = match parsed {
            Ok(addr) => addr,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    argument = %argument.identifier_string(),
                    value,
                    error = %err,
                    "address literal rejected"
                );
                return Err(fail(FailureKind::MalformedAddress).with_source(err));
            }
        };

        if !self.config.accepts(family) {
            return Err(fail(FailureKind::not_accepted(family)));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            argument = %argument.identifier_string(),
            value,
            family = %family,
            "address accepted"
        );

        Ok(addr)
    }

    /// Validate `value`, discarding the parsed address.
    pub fn validate(&self, argument: &dyn Argument, value: &str) -> Result<(), ValidationFailure> {
        self.parse(argument, value).map(|_| ())
    }

    /// Validate every occurrence of a multi-valued argument.
    ///
    /// Unlike chaining [`parse`](Self::parse) with `?`, this does not stop at
    /// the first bad value: all failures are returned, in input order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use argcheck::{ArgumentId, IpAddressValidator};
    ///
    /// let validator = IpAddressValidator::new();
    /// let arg = ArgumentId::long("peer");
    ///
    /// let addrs = validator.validate_all(&arg, ["10.0.0.1", "::1"]).unwrap();
    /// assert_eq!(addrs.len(), 2);
    ///
    /// let errors = validator.validate_all(&arg, ["x", "10.0.0.1", "y.z"]).unwrap_err();
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn validate_all<'a, I>(
        &self,
        argument: &dyn Argument,
        values: I,
    ) -> Result<Vec<IpAddr>, Vec<ValidationFailure>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut addrs = Vec::new();
        let mut failures = Vec::new();
        for value in values {
            match self.parse(argument, value) {
                Ok(addr) => addrs.push(addr),
                Err(failure) => failures.push(failure),
            }
        }

        if failures.is_empty() {
            Ok(addrs)
        } else {
            Err(failures)
        }
    }

    /// A sentence describing the accepted formats, for usage text.
    pub fn value_constraints(&self) -> &'static str {
        match (self.accept_ipv4(), self.accept_ipv6()) {
            (true, true) => "A provided value must be a valid IPv4 or IPv6 address.",
            (true, false) => "A provided value must be a valid IPv4 address.",
            _ => "A provided value must be a valid IPv6 address.",
        }
    }

    /// Diagnostic representation exposing both configuration flags.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<P> fmt::Display for IpAddressValidator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IpAddressValidator(acceptIPv4Addresses={}, acceptIPv6Addresses={})",
            self.config.accept_ipv4(),
            self.config.accept_ipv6()
        )
    }
}

impl<P: LiteralParser> ArgumentValueValidator for IpAddressValidator<P> {
    fn validate(&self, argument: &dyn Argument, value: &str) -> Result<(), ValidationFailure> {
        self.parse(argument, value).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::ArgumentId;
    use std::cell::Cell;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn arg() -> ArgumentId {
        ArgumentId::new(Some('a'), Some("address"))
    }

    fn kind_of(validator: &IpAddressValidator, value: &str) -> FailureKind {
        validator.validate(&arg(), value).unwrap_err().kind().clone()
    }

    #[test]
    fn test_accepts_ipv4() {
        let validator = IpAddressValidator::new();
        assert_eq!(
            validator.parse(&arg(), "192.168.1.1"),
            Ok(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)))
        );
    }

    #[test]
    fn test_accepts_ipv6() {
        let validator = IpAddressValidator::new();
        assert_eq!(
            validator.parse(&arg(), "::1"),
            Ok(IpAddr::V6(Ipv6Addr::LOCALHOST))
        );
        assert!(validator.validate(&arg(), "2001:DB8::ff00:42:8329").is_ok());
    }

    #[test]
    fn test_ipv4_not_accepted() {
        let validator = IpAddressValidator::with_families(false, true).unwrap();
        let err = validator.validate(&arg(), "192.168.1.1").unwrap_err();
        assert_eq!(err.kind(), &FailureKind::Ipv4NotAccepted);
        assert_eq!(err.value(), "192.168.1.1");
        assert_eq!(err.argument(), "--address");
    }

    #[test]
    fn test_ipv6_not_accepted() {
        let validator = IpAddressValidator::with_families(true, false).unwrap();
        assert_eq!(kind_of(&validator, "fe80::1"), FailureKind::Ipv6NotAccepted);
    }

    #[test]
    fn test_ipv4_mapped_is_ipv6() {
        let ipv4_only = IpAddressValidator::with_families(true, false).unwrap();
        assert_eq!(
            kind_of(&ipv4_only, "::ffff:192.168.1.1"),
            FailureKind::Ipv6NotAccepted
        );

        let ipv6_only = IpAddressValidator::with_families(false, true).unwrap();
        let addr = ipv6_only.parse(&arg(), "::ffff:192.168.1.1").unwrap();
        assert!(addr.is_ipv6());
    }

    #[test]
    fn test_out_of_range_octet_is_malformed() {
        let validator = IpAddressValidator::new();
        let err = validator.validate(&arg(), "192.168.1.999").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.literal_error().is_some());
    }

    #[test]
    fn test_no_separator_is_malformed() {
        let validator = IpAddressValidator::new();
        assert_eq!(kind_of(&validator, "abc"), FailureKind::MalformedAddress);
        assert_eq!(kind_of(&validator, ""), FailureKind::MalformedAddress);
        assert_eq!(kind_of(&validator, "3232235777"), FailureKind::MalformedAddress);
    }

    #[test]
    fn test_illegal_ipv4_char() {
        let validator = IpAddressValidator::new();
        assert_eq!(
            kind_of(&validator, "1.2.3.4g"),
            FailureKind::IllegalIpv4Character('g')
        );
        assert_eq!(
            kind_of(&validator, "www.example.com"),
            FailureKind::IllegalIpv4Character('w')
        );
    }

    #[test]
    fn test_illegal_ipv6_char() {
        let validator = IpAddressValidator::new();
        assert_eq!(
            kind_of(&validator, "fe80::1%eth0"),
            FailureKind::IllegalIpv6Character('%')
        );
        assert_eq!(
            kind_of(&validator, "[::1]"),
            FailureKind::IllegalIpv6Character('[')
        );
        // A host:port pair is an IPv6 candidate with illegal characters.
        assert_eq!(
            kind_of(&validator, "localhost:8080"),
            FailureKind::IllegalIpv6Character('l')
        );
    }

    #[test]
    fn test_charset_checked_before_policy() {
        let ipv6_only = IpAddressValidator::with_families(false, true).unwrap();
        assert_eq!(
            kind_of(&ipv6_only, "1.2.3.x"),
            FailureKind::IllegalIpv4Character('x')
        );
    }

    #[test]
    fn test_structure_checked_before_policy() {
        let ipv4_only = IpAddressValidator::with_families(true, false).unwrap();
        assert_eq!(kind_of(&ipv4_only, "1::2::3"), FailureKind::MalformedAddress);
    }

    #[test]
    fn test_configuration_error() {
        assert_eq!(
            IpAddressValidator::with_families(false, false),
            Err(ConfigurationError)
        );
    }

    #[test]
    fn test_accessors() {
        let validator = IpAddressValidator::with_families(true, false).unwrap();
        assert!(validator.accept_ipv4());
        assert!(!validator.accept_ipv6());
        assert_eq!(validator.config(), ValidatorConfig::ipv4_only());
        assert_eq!(IpAddressValidator::default(), IpAddressValidator::new());
    }

    #[test]
    fn test_describe() {
        let validator = IpAddressValidator::with_families(false, true).unwrap();
        assert_eq!(
            validator.describe(),
            "IpAddressValidator(acceptIPv4Addresses=false, acceptIPv6Addresses=true)"
        );
        assert_eq!(validator.describe(), validator.to_string());
    }

    #[test]
    fn test_value_constraints() {
        assert!(IpAddressValidator::new()
            .value_constraints()
            .contains("IPv4 or IPv6"));
        assert!(IpAddressValidator::from_config(ValidatorConfig::ipv4_only())
            .value_constraints()
            .ends_with("valid IPv4 address."));
        assert!(IpAddressValidator::from_config(ValidatorConfig::ipv6_only())
            .value_constraints()
            .ends_with("valid IPv6 address."));
    }

    #[test]
    fn test_validate_all_collects_every_failure() {
        let validator = IpAddressValidator::with_families(true, false).unwrap();
        let errors = validator
            .validate_all(&arg(), ["10.0.0.1", "::1", "abc", "1.2.3.4g"])
            .unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind().clone()).collect();
        assert_eq!(
            kinds,
            vec![
                FailureKind::Ipv6NotAccepted,
                FailureKind::MalformedAddress,
                FailureKind::IllegalIpv4Character('g'),
            ]
        );
    }

    #[test]
    fn test_validate_all_success() {
        let validator = IpAddressValidator::new();
        let addrs = validator
            .validate_all(&arg(), ["10.0.0.1", "::1"])
            .unwrap();
        assert_eq!(
            addrs,
            vec![
                IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
                IpAddr::V6(Ipv6Addr::LOCALHOST)
            ]
        );
        assert_eq!(validator.validate_all(&arg(), Vec::<&str>::new()), Ok(vec![]));
    }

    /// Counts calls and rejects everything.
    #[derive(Debug, Default)]
    struct RecordingParser {
        calls: Cell<usize>,
    }

    impl LiteralParser for RecordingParser {
        fn parse_literal(
            &self,
            _value: &str,
            family: AddressFamily,
        ) -> Result<IpAddr, LiteralError> {
            self.calls.set(self.calls.get() + 1);
            Err(LiteralError::new(family, "rejected by test parser"))
        }
    }

    #[test]
    fn test_parser_not_reached_for_hostnames() {
        let parser = RecordingParser::default();
        let validator = IpAddressValidator::with_parser(ValidatorConfig::both(), &parser);

        for value in ["example.com", "localhost", "my_host:1", "host.local"] {
            assert!(validator.validate(&arg(), value).is_err());
        }
        assert_eq!(parser.calls.get(), 0);

        let err = validator.validate(&arg(), "10.0.0.1").unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.literal_error().unwrap().reason(), "rejected by test parser");
        assert_eq!(parser.calls.get(), 1);
    }

    /// Answers every literal with the IPv4 loopback address.
    #[derive(Debug)]
    struct AlwaysIpv4Parser;

    impl LiteralParser for AlwaysIpv4Parser {
        fn parse_literal(
            &self,
            _value: &str,
            _family: AddressFamily,
        ) -> Result<IpAddr, LiteralError> {
            Ok(IpAddr::V4(Ipv4Addr::LOCALHOST))
        }
    }

    #[test]
    fn test_parser_family_mismatch_is_malformed() {
        let validator =
            IpAddressValidator::with_parser(ValidatorConfig::ipv6_only(), AlwaysIpv4Parser);

        let err = validator.parse(&arg(), "::1").unwrap_err();
        assert!(err.is_malformed());
        let literal = err.literal_error().unwrap();
        assert_eq!(literal.family(), AddressFamily::Ipv6);
        assert!(literal.reason().contains("IPv4"));

        let both = IpAddressValidator::with_parser(ValidatorConfig::both(), AlwaysIpv4Parser);
        assert_eq!(
            both.parse(&arg(), "10.0.0.1"),
            Ok(IpAddr::V4(Ipv4Addr::LOCALHOST))
        );
        assert!(both.parse(&arg(), "fe80::1").unwrap_err().is_malformed());
    }
}
