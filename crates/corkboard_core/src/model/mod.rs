//! Board domain model.
//!
//! # Responsibility
//! - Define the records a board is made of: items, connections,
//!   categories and the background.
//! - Define the serialized blob shape shared by restore, save and import.
//!
//! # Invariants
//! - Every record is identified by a stable string id.
//! - Wire field names are camelCase.

pub mod background;
pub mod category;
pub mod connection;
mod decode;
pub mod item;
pub mod snapshot;
