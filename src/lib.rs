//! chart-fit: auto-fitting 2-D chart core.
//!
//! Data groups accumulate series, fit them into a fixed viewport through an
//! affine [`core::Transform`], and materialize backend-agnostic primitives.

pub mod api;
pub mod color;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{DataGroupId, Plot, PlotConfig};
pub use error::{ChartError, ChartResult};
