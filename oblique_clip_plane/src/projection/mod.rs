//! Projection module: per-frame oblique projection updates.

mod oblique_projection;
mod updater;

pub use oblique_projection::{FrameContext, ObliqueProjection, update_projection};
pub use updater::{MonoscopicUpdater, ProjectionUpdater, StereoUpdater};
