//! # pixshare-service
//!
//! Domain logic for the PixShare sharing backend: link id generation,
//! the expiry policy, the share lifecycle service (create / list / renew
//! / revoke), and the capability resolver that exchanges a link id for a
//! temporary photo URL.

pub mod context;
pub mod share;

pub use context::RequestContext;
