//! Token claims and the unverified payload decoder.
//!
//! Tokens arrive from the login endpoint as opaque three-segment strings.
//! This module splits out the payload segment and deserializes it into
//! [`Claims`] without checking the signature; see [`decode`] for the trust
//! implications.
//!
//! # Example
//!
//! ```rust
//! use vestibule::token;
//!
//! // header.payload.signature, payload = {"sub":"user@example.com","exp":1700000000}
//! let raw = "e30.eyJzdWIiOiJ1c2VyQGV4YW1wbGUuY29tIiwiZXhwIjoxNzAwMDAwMDAwfQ.sig";
//!
//! let claims = token::decode(raw).unwrap();
//! assert_eq!(claims.subject(), Some("user@example.com"));
//! ```

mod claims;
mod codec;

pub use claims::Claims;
pub use codec::decode;
