//! Transit schedule gateway server.
//!
//! A thin HTTP service that answers: "how do I get from this station to
//! that one on this date?" It resolves human-readable station names to
//! provider codes through a static directory and forwards each query to
//! the upstream schedule API, returning the provider's payload verbatim.

pub mod archive;
pub mod compose;
pub mod rasp;
pub mod stations;
pub mod web;
