//! Chunked outbound message delivery for the pony-express texting assistant.
//!
//! This crate provides:
//!
//! - **Chunking**: splitting replies into transport-sized pieces on
//!   whitespace boundaries
//! - **Transport**: the trait implemented by the SMS/chat provider client
//! - **Dispatcher**: ordered, failure-isolated sending of chunks

pub mod chunk;
pub mod dispatcher;
pub mod transport;

pub use chunk::{MAX_CHUNK_LEN, split_message};
pub use dispatcher::{DeliveryReceipt, Dispatcher};
pub use transport::{Transport, TransportError};
