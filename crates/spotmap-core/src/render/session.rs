//! Map session: one map, its markers, and the sidebar that points at them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::pipeline::SpotPipeline;
use crate::traits::{Geocode, MapView, RecordSource};
use crate::types::{Bounds, DatabaseId, MarkerHandle, Spot, SpotId};

use super::markers::{fit_viewport, place_markers};
use super::sidebar::{SidebarEntry, sidebar_entries};
use super::RenderConfig;

/// Identifies one resolution pass. Only the most recently issued token may
/// render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassToken {
    generation: u64,
    database: DatabaseId,
}

impl PassToken {
    pub fn database(&self) -> &DatabaseId {
        &self.database
    }
}

/// What a completed render placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub markers: usize,
    /// Bounds the viewport was fitted to; `None` when nothing was placed.
    pub bounds: Option<Bounds>,
}

struct SessionState<M> {
    map: M,
    database: Option<DatabaseId>,
    markers: HashMap<SpotId, MarkerHandle>,
    sidebar: Vec<SidebarEntry>,
}

/// Owns one map widget and everything rendered on it.
///
/// Passes may overlap (e.g. the user switches databases while a slow pass is
/// still geocoding). Each pass takes a [`PassToken`] up front; results of a
/// pass whose token has been superseded are discarded.
pub struct MapSession<M> {
    state: Mutex<SessionState<M>>,
    generation: AtomicU64,
    config: RenderConfig,
}

impl<M: MapView> MapSession<M> {
    pub fn new(map: M, config: RenderConfig) -> Self {
        Self {
            state: Mutex::new(SessionState {
                map,
                database: None,
                markers: HashMap::new(),
                sidebar: Vec::new(),
            }),
            generation: AtomicU64::new(0),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Start a pass for `database`, superseding every earlier token.
    pub fn begin(&self, database: &DatabaseId) -> PassToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, %database, "Starting pass");
        PassToken {
            generation,
            database: database.clone(),
        }
    }

    pub fn is_current(&self, token: &PassToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation
    }

    /// Render `spots` if `token` is still current.
    ///
    /// Markers and the sidebar are replaced right away; the resize-and-fit
    /// runs after the configured settle delay. Returns `None` when the pass
    /// was superseded at either point.
    #[instrument(skip(self, token, spots), fields(database = %token.database, spots = spots.len()))]
    pub async fn show(&self, token: PassToken, spots: Vec<Spot>) -> Option<RenderSummary> {
        {
            let mut state = self.state.lock().await;
            if !self.is_current(&token) {
                debug!("Discarding stale pass");
                return None;
            }

            let handles = place_markers(&mut state.map, &spots, &self.config);
            state.sidebar = sidebar_entries(&spots, &self.config);
            state.markers = marker_index(handles);
            state.database = Some(token.database.clone());
        }

        tokio::time::sleep(self.config.settle_delay).await;

        let mut state = self.state.lock().await;
        if !self.is_current(&token) {
            debug!("Pass superseded before fitting");
            return None;
        }

        let bounds = fit_viewport(&mut state.map, &self.config);
        let summary = RenderSummary {
            markers: state.map.marker_count(),
            bounds,
        };
        info!(markers = summary.markers, "Rendered map");
        Some(summary)
    }

    /// Run a full pass: fetch, resolve and render `database`.
    pub async fn open<S, G>(
        &self,
        pipeline: &SpotPipeline<S, G>,
        database: &DatabaseId,
    ) -> Option<RenderSummary>
    where
        S: RecordSource,
        G: Geocode,
    {
        let token = self.begin(database);
        let spots = pipeline.fetch_spots(database).await;
        self.show(token, spots).await
    }

    /// Center the map on a spot's marker at the focus zoom and open its
    /// popup. Returns false if the spot has no marker.
    pub async fn focus(&self, spot: &SpotId) -> bool {
        let mut state = self.state.lock().await;
        let Some(&handle) = state.markers.get(spot) else {
            return false;
        };
        let Some(position) = state.map.marker_position(handle) else {
            return false;
        };

        state.map.set_view(position, self.config.focus_zoom);
        state.map.open_popup(handle)
    }

    /// Sidebar entries of the last render.
    pub async fn sidebar(&self) -> Vec<SidebarEntry> {
        self.state.lock().await.sidebar.clone()
    }

    /// Database shown by the last render.
    pub async fn database(&self) -> Option<DatabaseId> {
        self.state.lock().await.database.clone()
    }

    pub async fn marker_for(&self, spot: &SpotId) -> Option<MarkerHandle> {
        self.state.lock().await.markers.get(spot).copied()
    }

    /// Read access to the map widget.
    pub async fn with_map<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&self.state.lock().await.map)
    }
}

// First handle wins when spots repeat an id, matching the first sidebar entry.
fn marker_index(handles: Vec<(SpotId, MarkerHandle)>) -> HashMap<SpotId, MarkerHandle> {
    let mut index = HashMap::with_capacity(handles.len());
    for (spot, handle) in handles {
        if index.contains_key(&spot) {
            warn!(%spot, ?handle, "Repeated spot id, marker not focusable");
            continue;
        }
        index.insert(spot, handle);
    }
    index
}

impl<M> std::fmt::Debug for MapSession<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSession")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
