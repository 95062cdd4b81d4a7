//! # pixshare-core
//!
//! Core crate for the PixShare sharing backend. Contains the trait seam
//! for temporary access issuance, configuration schemas, typed
//! identifiers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other PixShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
