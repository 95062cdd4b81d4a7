//! Core traits defined in `pixshare-core` and implemented by other crates.

pub mod issuer;

pub use issuer::{AccessIssuer, IssuedAccess};
