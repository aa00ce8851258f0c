//! Transport layer shared by every data-fetching and mutation hook.
//!
//! - `client`: request dispatch with bearer-token attachment, the
//!   client-wide timeout and the 401 session-invalidation side effect.
//! - `error`: the `ApiError` taxonomy and the ordered message-extraction
//!   probes applied to server error payloads.
//! - `normalize`: tolerant decoding of list responses.

pub mod client;
pub mod error;
pub mod normalize;

pub use error::ApiError;
