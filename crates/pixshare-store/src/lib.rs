//! # pixshare-store
//!
//! Share Record Store: persistence for [`ShareLink`] records keyed by
//! link id, with a secondary lookup path keyed by photo id.
//!
//! Two implementations of [`ShareLinkStore`] are provided:
//! [`postgres::PostgresShareLinkStore`] for production and
//! [`memory::MemoryShareLinkStore`] for tests and single-node
//! development. Both express every mutation as an atomic conditional
//! operation; callers never do read-then-write.
//!
//! [`ShareLink`]: pixshare_entity::ShareLink

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryShareLinkStore;
pub use postgres::PostgresShareLinkStore;
pub use store::{InsertOutcome, MutationOutcome, ShareLinkStore};
