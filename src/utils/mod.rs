//! Utility functions for address handling.
//!
//! - [`ip_validator`] - Shape validation of IPv4/IPv6 literals
//! - [`flag`] - Country code to flag emoji conversion
//! - [`client_ip`] - Working address derivation from request metadata

pub mod client_ip;
pub mod flag;
pub mod ip_validator;
