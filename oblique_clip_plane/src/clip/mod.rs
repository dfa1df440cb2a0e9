//! Clip module: camera-space clip planes and oblique projection matrices.

mod clip_plane;
mod oblique;

pub use clip_plane::{
    ClipPlane, DEGENERATE_NORMAL_EPSILON,
    compute_clip_plane, compute_clip_plane_with_offset,
};
pub use oblique::{
    make_oblique, make_oblique_simple,
    try_make_oblique, try_make_oblique_simple,
};
