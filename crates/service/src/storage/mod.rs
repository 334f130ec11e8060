//! Storage abstractions for service layer
//!
//! One generic in-memory store, reused by every resource so the lookup and
//! mutation rules live in a single place.

pub mod record_store;

pub use record_store::RecordStore;
