//! Web layer for the schedule gateway.
//!
//! Provides HTTP endpoints for schedule lookups and route composition.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
