//! # pixshare-entity
//!
//! Domain entities for the PixShare sharing backend.

pub mod share;

pub use share::{CreateShareLink, ShareLink};
