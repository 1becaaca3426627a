//! Read-only rendering support
//!
//! The renderer proper (window, surface, text) lives in the shell; this
//! module provides the software rasterization primitives and turns the
//! simulation state into plain draw lists the shell can blit.

pub mod raster;
pub mod scene;

pub use raster::{circle_outline, filled_circle, line};
pub use scene::{Color, Frame, PointSpan, TriangleFan, build_frame};
