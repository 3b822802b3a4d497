//! Filter query construction.
//!
//! This module translates user-entered filter controls into the server query
//! string. It is split the way the encoding rules compose:
//!
//! - [`encode`]: pure per-control fragment encoders (generic, rate-range,
//!   age-bucket) and percent-escaping
//! - [`builder`]: control snapshots and the assembly of fragments plus the
//!   sort directive into one query string

pub mod builder;
pub mod encode;

pub use builder::{build_query, build_query_at, ControlState, ControlValue, SORT_KEY};
pub use encode::{encode_age, encode_multi, encode_range, encode_scalar, escape};
