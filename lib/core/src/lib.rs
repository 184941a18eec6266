//! Core domain types for the pony-express texting assistant.
//!
//! This crate provides the strongly-typed identifiers shared by the
//! conversation, scheduler, and outbound crates.

pub mod id;

pub use id::{DeliveryId, MessageId, ParseIdError, ReminderId};
