//! Transport boundary between the panel core and the host.
//!
//! The core describes what should cross the network as data — request and
//! response values — and leaves the carrying to the host. This keeps the
//! panel logic synchronous and single-threaded while searches and favorite
//! toggles complete asynchronously outside it.

pub mod messages;

pub use messages::{FavoriteAction, TransportRequest, TransportResponse};
