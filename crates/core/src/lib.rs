//! Domain types and pure logic for the RWA asset registry.
//!
//! Nothing in this crate touches the database or the network: the metrics
//! deriver, mint-payload parsing and the holder-data seam are all plain
//! functions over plain values so they can be unit tested in isolation.

pub mod error;
pub mod holders;
pub mod metrics;
pub mod minting;
pub mod types;
