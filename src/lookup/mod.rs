//! The lookup chain: public IP -> coordinates -> flyover times.
//!
//! Three dependent HTTP GETs, executed strictly in order. The first failed
//! stage aborts the chain; later stages are never attempted and no partial
//! result is returned.

mod client;
mod error;
mod types;

pub use client::LookupClient;
pub use error::{LookupError, Stage};
pub use types::{Coordinates, Pass};
