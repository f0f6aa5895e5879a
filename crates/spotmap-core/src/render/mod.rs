//! Rendering resolved spots: map markers, the sidebar list, and the map
//! session that ties them together.

mod config;
mod markers;
mod memory;
mod session;
mod settings;
mod sidebar;

pub use config::RenderConfig;
pub use markers::{fit_viewport, marker_for, place_markers};
pub use memory::{MemoryMap, Viewport};
pub use session::{MapSession, PassToken, RenderSummary};
pub use settings::{MapSettings, NoopMapConfigStore};
pub use sidebar::{SidebarEntry, sidebar_entries};
