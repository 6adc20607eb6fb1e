//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and the pipeline entry point
//! - `wire.rs` — Raw serde structs matching provider responses
//! - `convert.rs` — Wire → domain conversions
//! - `state.rs` — State containers (the response cache)
//! - `client.rs` — Sub-client with fetch + caching

pub mod candle;
