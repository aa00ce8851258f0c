//! Shared request/response contracts for the sacco web client.
//!
//! Everything in this crate is a transport-layer DTO exchanged with the
//! remote REST API. No I/O, no business logic beyond serialization rules.

pub mod domain;
pub mod system;
