//! Validates the addresses given on the command line
//!
//! Run with: cargo run --example validate_addresses --features tracing -- 10.0.0.1 ::1 host.local
//!
//! Set `IPV4_ONLY=1` or `IPV6_ONLY=1` to restrict the accepted families.

use argcheck::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let config = match (
        std::env::var_os("IPV4_ONLY").is_some(),
        std::env::var_os("IPV6_ONLY").is_some(),
    ) {
        (true, false) => ValidatorConfig::ipv4_only(),
        (false, true) => ValidatorConfig::ipv6_only(),
        _ => ValidatorConfig::both(),
    };

    let validator = IpAddressValidator::from_config(config);
    let arg = ArgumentId::new(Some('a'), Some("address"));
    tracing::info!("Using {}", validator);
    tracing::info!("{}", validator.value_constraints());

    let values: Vec<String> = std::env::args().skip(1).collect();
    match validator.validate_all(&arg, values.iter().map(String::as_str)) {
        Ok(addrs) => {
            for addr in addrs {
                tracing::info!("Accepted {}", addr);
            }
        }
        Err(failures) => {
            for failure in &failures {
                tracing::error!("{}", failure);
            }
            std::process::exit(1);
        }
    }
}
