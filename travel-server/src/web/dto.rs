//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::rasp::ScheduleResult;

/// Query parameters for the schedule endpoint.
///
/// Every field is optional at the deserialization layer so that an absent
/// parameter and an empty one travel the same validation path.
#[derive(Debug, Deserialize)]
pub struct ScheduleParams {
    /// Origin station name or marker-prefixed code
    pub from_station: Option<String>,

    /// Destination station name or marker-prefixed code
    pub to_station: Option<String>,

    /// Travel date, YYYY-MM-DD
    pub date: Option<String>,
}

/// Query parameters for the direct-route endpoint.
#[derive(Debug, Deserialize)]
pub struct DirectRouteParams {
    /// Origin station name or marker-prefixed code
    pub origin: Option<String>,

    /// Destination station name or marker-prefixed code
    pub destination: Option<String>,

    /// Travel date, YYYY-MM-DD
    pub date: Option<String>,
}

/// Query parameters for the composite-route endpoint.
#[derive(Debug, Deserialize)]
pub struct ComplexRouteParams {
    /// Origin station name or marker-prefixed code
    pub origin: Option<String>,

    /// Transfer station name or marker-prefixed code
    pub transfer: Option<String>,

    /// Destination station name or marker-prefixed code
    pub destination: Option<String>,

    /// Travel date, YYYY-MM-DD
    pub date: Option<String>,
}

/// Response for a direct-route lookup that found an itinerary.
#[derive(Debug, Serialize)]
pub struct DirectRouteResponse {
    /// The provider's schedule payload, verbatim
    pub direct_route: ScheduleResult,
}

/// Response carrying a fixed advisory message.
#[derive(Debug, Serialize)]
pub struct AdvisoryResponse {
    /// Human-readable advisory
    pub message: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
