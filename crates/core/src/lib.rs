//! Domain layer for the movie catalogue service.
//!
//! Holds the types and rules shared by the repository and HTTP layers. This
//! crate performs no I/O.

pub mod error;
pub mod movie;
pub mod search;
pub mod types;
