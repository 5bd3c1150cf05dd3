mod kind;
mod options;
mod suitability;

pub use kind::{ChartKind, DEFAULT_BUBBLE_RADIUS, MAX_CIRCULAR_POINTS, MIN_RADAR_DIMENSIONS};
pub use options::{ASPECT_RATIO_RANGE, Capabilities, ChartConfig, chart_options};
pub use suitability::{is_shape_suitable, is_suitable, suitable_kinds};
