//! Transport-agnostic request/response contract.
//!
//! A request names a method and carries JSON params; each method has a typed
//! params struct, so malformed payloads are rejected with `invalid_input`
//! before the repository is reached.

mod requests;
mod response;
mod router;

pub use requests::Request;
pub use response::{err, ok};
pub use router::handle_request;
