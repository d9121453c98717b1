pub mod color;
pub mod geometry;
pub mod layout;
pub mod reconcile;
pub mod scale;
pub mod text;
pub mod transition;

pub use color::Color;
pub use geometry::{
    BarState, ColumnStates, ColumnVisual, Fill, GroupTranslation, MAX_BAND_WIDTH, ResolvedColumn,
    StateValue, SubColumn, capped_bandwidth,
};
pub use layout::{Bounds, DEFAULT_INTER_AXIS_PADDING, Layout, Margins};
pub use scale::{BandScale, LinearScale, ScaleOptions, VALUE_DOMAIN_HEADROOM};
pub use text::{FixedAdvance, LineFragment, TextMeasure, WrapPlan, format_labels, wrap_label};
pub use transition::{
    AXIS_FADE_MS, BAR_TRANSITION_MS, Easing, STAGGER_DELAY_MS, Transition, stagger_offset_ms,
};
