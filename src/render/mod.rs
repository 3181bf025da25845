//! Renderer side of the machine boundary.
//!
//! Renderers consume [`Snapshot`]s taken after each transition. The text
//! renderer reproduces the classic widget layout line by line.

pub mod error;
mod snapshot;
mod text;

pub use error::SnapshotError;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use text::TextRenderer;
