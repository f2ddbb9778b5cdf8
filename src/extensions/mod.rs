//! Annotation modules layered on top of fitted series.
//!
//! Annotations only read a fitted transform and value range. They never
//! influence the fit itself.

pub mod markers;

pub use markers::{
    AxisLabel, EXTREME_LINE_STYLE, ReferenceKind, ReferenceLine, ReferenceMarkerConfig,
    ZERO_LINE_STYLE, axis_labels, reference_lines,
};
