//! HTTP request/response interception helpers.
//!
//! The crate does not own an HTTP pipeline; these are the two pieces an
//! application wires into its own client:
//!
//! - [`attach_authorization`] decorates outgoing requests with the stored
//!   token, when there is a live one to attach.
//! - [`UnauthorizedInterceptor`] reacts to 401 responses: the session is
//!   over, clear it and send the user back to login.

mod bearer;
mod unauthorized;

pub use bearer::attach_authorization;
pub use unauthorized::UnauthorizedInterceptor;
