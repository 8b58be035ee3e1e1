//! Yandex.Rasp schedule API client.
//!
//! The provider answers point-to-point schedule queries; responses are
//! treated as opaque JSON objects and passed through to callers verbatim.

mod client;
mod error;

pub use client::{RaspClient, RaspConfig, ScheduleResult};
pub use error::RaspError;
