//! Geo/ASN database readers.

pub mod maxmind_resolver;

pub use maxmind_resolver::MaxmindResolver;
