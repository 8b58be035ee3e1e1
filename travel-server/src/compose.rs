//! Route composition over the schedule provider.
//!
//! Three operations built on the station directory and a schedule source:
//! a single-leg schedule lookup, a direct-route lookup (one fetch plus a
//! presence check), and a one-transfer composite route stitched from two
//! sequential fetches. Each operation validates its parameters and
//! resolves every station identifier before issuing any outbound call, so
//! a bad request never costs a network round trip.

use std::future::Future;

use chrono::{Local, SecondsFormat};
use serde::Serialize;
use tracing::{info, warn};

use crate::archive::ResultArchive;
use crate::rasp::{RaspError, ScheduleResult};
use crate::stations::{StationCode, StationDirectory, StationNotFound};

/// Key whose presence marks a non-empty itinerary in a provider response.
const THREADS_KEY: &str = "threads";

/// Advisory returned when a direct-route query finds no itinerary.
pub const NO_DIRECT_ROUTE_ADVISORY: &str =
    "No direct route found. Transfer route search is not yet implemented.";

/// Errors from the route composition operations.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// One or more required parameters were empty or absent
    #[error("missing required parameters: {}", .fields.join(", "))]
    MissingParameter { fields: Vec<&'static str> },

    /// A station identifier matched nothing in the directory
    #[error(transparent)]
    StationNotFound(#[from] StationNotFound),

    /// A single-leg fetch failed
    #[error("failed to fetch schedule: {0}")]
    Fetch(#[from] RaspError),

    /// A composite-route leg fetch failed
    #[error("failed to fetch leg from {from} to {to}: {source}")]
    Leg {
        from: StationCode,
        to: StationCode,
        #[source]
        source: RaspError,
    },
}

/// Source of point-to-point schedule data.
///
/// This abstraction lets the composition logic be tested without network
/// access. The production implementation is [`crate::rasp::RaspClient`].
pub trait ScheduleSource {
    /// Fetch the schedule for one (from, to, date) leg.
    fn fetch_schedule(
        &self,
        from: &StationCode,
        to: &StationCode,
        date: &str,
    ) -> impl Future<Output = Result<ScheduleResult, RaspError>> + Send;
}

/// Outcome of a direct-route lookup.
///
/// Both variants are successful responses; the absence of a direct route
/// is not an error.
#[derive(Debug)]
pub enum DirectRouteOutcome {
    /// The provider returned at least one direct itinerary.
    Found(ScheduleResult),
    /// No itinerary; callers render the fixed advisory message.
    NoDirectRoute,
}

/// A one-transfer route assembled from two point-to-point results.
#[derive(Debug, Serialize)]
pub struct ComplexRouteResult {
    /// Origin to transfer schedule, verbatim.
    pub leg1: ScheduleResult,
    /// Transfer to destination schedule, verbatim.
    pub leg2: ScheduleResult,
    /// When the composite request was handled, RFC 3339.
    pub requested_at: String,
}

/// Whether a provider response contains at least one direct itinerary.
///
/// The `"threads"` key must be present and non-null; its contents are
/// never interpreted.
pub fn has_direct_itinerary(result: &ScheduleResult) -> bool {
    result
        .get(THREADS_KEY)
        .is_some_and(|threads| !threads.is_null())
}

/// Fail with the names of every required parameter that is empty.
fn require_params(params: &[(&'static str, &str)]) -> Result<(), ComposeError> {
    let missing: Vec<&'static str> = params
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ComposeError::MissingParameter { fields: missing })
    }
}

/// Look up the schedule between two stations on a date.
///
/// Resolves both station identifiers, then issues exactly one provider
/// call and returns its response verbatim.
pub async fn schedule_lookup<S: ScheduleSource>(
    source: &S,
    directory: &StationDirectory,
    from_station: &str,
    to_station: &str,
    date: &str,
) -> Result<ScheduleResult, ComposeError> {
    require_params(&[
        ("from_station", from_station),
        ("to_station", to_station),
        ("date", date),
    ])?;

    let from = directory.resolve(from_station)?;
    let to = directory.resolve(to_station)?;

    Ok(source.fetch_schedule(&from, &to, date).await?)
}

/// Look up a direct route between two stations on a date.
///
/// One provider call; the response decides the outcome through the
/// `"threads"` presence check.
pub async fn direct_route<S: ScheduleSource>(
    source: &S,
    directory: &StationDirectory,
    origin: &str,
    destination: &str,
    date: &str,
) -> Result<DirectRouteOutcome, ComposeError> {
    require_params(&[
        ("origin", origin),
        ("destination", destination),
        ("date", date),
    ])?;

    let from = directory.resolve(origin)?;
    let to = directory.resolve(destination)?;

    let result = source.fetch_schedule(&from, &to, date).await?;

    if has_direct_itinerary(&result) {
        Ok(DirectRouteOutcome::Found(result))
    } else {
        Ok(DirectRouteOutcome::NoDirectRoute)
    }
}

/// Compose a one-transfer route through an intermediate station.
///
/// The two legs are fetched strictly in sequence; a first-leg failure
/// short-circuits, and the second call is never issued. On success the
/// assembled result is archived to disk best-effort: a write failure is
/// logged and the result is still returned to the caller.
pub async fn complex_route<S: ScheduleSource>(
    source: &S,
    directory: &StationDirectory,
    archive: &ResultArchive,
    origin: &str,
    transfer: &str,
    destination: &str,
    date: &str,
) -> Result<ComplexRouteResult, ComposeError> {
    require_params(&[
        ("origin", origin),
        ("transfer", transfer),
        ("destination", destination),
        ("date", date),
    ])?;

    let origin_code = directory.resolve(origin)?;
    let transfer_code = directory.resolve(transfer)?;
    let destination_code = directory.resolve(destination)?;

    let leg1 = source
        .fetch_schedule(&origin_code, &transfer_code, date)
        .await
        .map_err(|e| ComposeError::Leg {
            from: origin_code.clone(),
            to: transfer_code.clone(),
            source: e,
        })?;

    let leg2 = source
        .fetch_schedule(&transfer_code, &destination_code, date)
        .await
        .map_err(|e| ComposeError::Leg {
            from: transfer_code.clone(),
            to: destination_code.clone(),
            source: e,
        })?;

    let requested_at = Local::now();
    let result = ComplexRouteResult {
        leg1,
        leg2,
        requested_at: requested_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    match archive.save(requested_at, &result) {
        Ok(path) => info!(path = %path.display(), "Saved composite route result"),
        Err(e) => warn!(error = %e, "Failed to archive composite route result"),
    }

    Ok(result)
}
