//! Application state for the web layer.

use std::sync::Arc;

use crate::archive::ResultArchive;
use crate::rasp::RaspClient;
use crate::stations::StationDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Upstream schedule API client
    pub rasp: Arc<RaspClient>,

    /// Station name to provider code directory
    pub directory: Arc<StationDirectory>,

    /// Archive for composite route results
    pub archive: Arc<ResultArchive>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(rasp: RaspClient, directory: StationDirectory, archive: ResultArchive) -> Self {
        Self {
            rasp: Arc::new(rasp),
            directory: Arc::new(directory),
            archive: Arc::new(archive),
        }
    }
}
