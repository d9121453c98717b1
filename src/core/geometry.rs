use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::layout::Layout;
use crate::core::scale::{BandScale, LinearScale};

/// Hard cap on rendered band width, keeping bars from growing excessively fat
/// on sparse data.
pub const MAX_BAND_WIDTH: f64 = 45.0;

/// Corner radius applied to bar and shadow rectangles.
pub const BAR_CORNER_RADIUS: f64 = 8.0;

/// Bar fill: either the chart's gradient definition or a solid color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Gradient,
    Solid(Color),
}

/// One bar-state field: a constant or a per-record computation.
///
/// Resolved exactly once per record at plan time, so the render surface only
/// ever sees concrete values.
pub enum StateValue<'a, T, V> {
    Constant(V),
    Computed(Box<dyn Fn(&T) -> V + 'a>),
}

impl<T, V: Clone> StateValue<'_, T, V> {
    pub fn resolve(&self, record: &T) -> V {
        match self {
            Self::Constant(value) => value.clone(),
            Self::Computed(compute) => compute(record),
        }
    }
}

/// Declarative visual state of one rectangle, before per-record resolution.
pub struct BarState<'a, T> {
    pub fill: StateValue<'a, T, Fill>,
    pub x: StateValue<'a, T, f64>,
    pub y: StateValue<'a, T, f64>,
    pub width: StateValue<'a, T, f64>,
    pub height: StateValue<'a, T, f64>,
}

impl<T> BarState<'_, T> {
    pub fn resolve(&self, record: &T) -> ColumnVisual {
        ColumnVisual {
            fill: self.fill.resolve(record),
            x: self.x.resolve(record),
            y: self.y.resolve(record),
            width: self.width.resolve(record),
            height: self.height.resolve(record),
        }
    }
}

/// Group translation of one bar column within the plot.
pub struct GroupTranslation<'a, T> {
    pub x: StateValue<'a, T, f64>,
    pub y: StateValue<'a, T, f64>,
}

impl<T> GroupTranslation<'_, T> {
    pub fn resolve(&self, record: &T) -> (f64, f64) {
        (self.x.resolve(record), self.y.resolve(record))
    }
}

/// Fully resolved rectangle geometry handed to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnVisual {
    pub fill: Fill,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Initial ("just entered") and final ("settled") states for one orientation,
/// plus the group translation shared by both rectangles.
pub struct ColumnStates<'a, T> {
    pub enter_bar: BarState<'a, T>,
    pub enter_shadow: BarState<'a, T>,
    pub target_bar: BarState<'a, T>,
    pub target_shadow: BarState<'a, T>,
    pub translation: GroupTranslation<'a, T>,
}

/// Per-record resolution of [`ColumnStates`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColumn {
    pub translate: (f64, f64),
    pub enter_bar: ColumnVisual,
    pub enter_shadow: ColumnVisual,
    pub target_bar: ColumnVisual,
    pub target_shadow: ColumnVisual,
}

impl<T> ColumnStates<'_, T> {
    pub fn resolve(&self, records: &[T]) -> Vec<ResolvedColumn> {
        records
            .iter()
            .map(|record| ResolvedColumn {
                translate: self.translation.resolve(record),
                enter_bar: self.enter_bar.resolve(record),
                enter_shadow: self.enter_shadow.resolve(record),
                target_bar: self.target_bar.resolve(record),
                target_shadow: self.target_shadow.resolve(record),
            })
            .collect()
    }
}

/// Natural bandwidth clamped to [`MAX_BAND_WIDTH`].
#[must_use]
pub fn capped_bandwidth(scale: &BandScale) -> f64 {
    scale.bandwidth().min(MAX_BAND_WIDTH)
}

/// States for a vertical bar graph: bars grow upward from the baseline, the
/// shadow always spans the full plot height as a static track.
pub fn vertical_states<'a, T>(
    layout: Layout,
    value_scale: LinearScale,
    label_scale: &'a BandScale,
    get_label: &'a dyn Fn(&T) -> String,
    get_value: &'a dyn Fn(&T) -> f64,
) -> ColumnStates<'a, T> {
    let bandwidth = capped_bandwidth(label_scale);
    let natural = label_scale.bandwidth();
    let baseline = value_scale.scaled(0.0);

    let enter_shadow = BarState {
        fill: StateValue::Constant(Fill::Solid(Color::SHADOW)),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(baseline),
        width: StateValue::Constant(bandwidth),
        height: StateValue::Constant(0.0),
    };
    let enter_bar = BarState {
        fill: StateValue::Constant(Fill::Gradient),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(baseline),
        width: StateValue::Constant(bandwidth),
        height: StateValue::Constant(0.0),
    };
    let target_shadow = BarState {
        fill: StateValue::Constant(Fill::Solid(Color::SHADOW)),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(0.0),
        width: StateValue::Constant(bandwidth),
        height: StateValue::Constant(layout.height),
    };
    let target_bar = BarState {
        fill: StateValue::Constant(Fill::Gradient),
        x: StateValue::Constant(0.0),
        y: StateValue::Computed(Box::new(move |record: &T| value_scale.scaled(get_value(record)))),
        width: StateValue::Constant(bandwidth),
        height: StateValue::Computed(Box::new(move |record: &T| {
            layout.height - value_scale.scaled(get_value(record))
        })),
    };

    let translation = GroupTranslation {
        x: StateValue::Computed(Box::new(move |record: &T| {
            layout.margins.left
                + label_scale.position(&get_label(record)).unwrap_or(0.0)
                + (natural - bandwidth) / 2.0
        })),
        y: StateValue::Constant(layout.margins.top),
    };

    ColumnStates {
        enter_bar,
        enter_shadow,
        target_bar,
        target_shadow,
        translation,
    }
}

/// States for a horizontal bar graph: bars grow rightward from a fixed left
/// offset, the shadow spans the available width minus the inter-axis padding.
pub fn horizontal_states<'a, T>(
    layout: Layout,
    value_scale: LinearScale,
    label_scale: &'a BandScale,
    get_label: &'a dyn Fn(&T) -> String,
    get_value: &'a dyn Fn(&T) -> f64,
) -> ColumnStates<'a, T> {
    let bandwidth = capped_bandwidth(label_scale);
    let natural = label_scale.bandwidth();
    let baseline = value_scale.scaled(0.0);

    let enter_shadow = BarState {
        fill: StateValue::Constant(Fill::Solid(Color::SHADOW)),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(0.0),
        width: StateValue::Constant(0.0),
        height: StateValue::Constant(bandwidth),
    };
    let enter_bar = BarState {
        fill: StateValue::Constant(Fill::Gradient),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(baseline),
        width: StateValue::Constant(0.0),
        height: StateValue::Constant(bandwidth),
    };
    let target_shadow = BarState {
        fill: StateValue::Constant(Fill::Solid(Color::SHADOW)),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(0.0),
        width: StateValue::Constant(layout.width - layout.inter_axis_padding),
        height: StateValue::Constant(bandwidth),
    };
    let target_bar = BarState {
        fill: StateValue::Constant(Fill::Gradient),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(baseline),
        width: StateValue::Computed(Box::new(move |record: &T| value_scale.scaled(get_value(record)))),
        height: StateValue::Constant(bandwidth),
    };

    let translation = GroupTranslation {
        x: StateValue::Constant(layout.margins.left + layout.inter_axis_padding * 2.0),
        y: StateValue::Computed(Box::new(move |record: &T| {
            layout.margins.top
                + label_scale.position(&get_label(record)).unwrap_or(0.0)
                + (natural - bandwidth) / 2.0
        })),
    };

    ColumnStates {
        enter_bar,
        enter_shadow,
        target_bar,
        target_shadow,
        translation,
    }
}

/// One expanded sub-series member of a multi-series record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubColumn {
    pub series_index: usize,
    pub fill: Color,
    pub label: String,
    pub value: f64,
    pub tooltip: String,
    /// Category band position, margins already applied.
    pub x_offset: f64,
}

/// States for the sub-columns of a multi-series vertical graph. One value
/// scale is shared across all series; fills are per-series constants carried
/// on the expanded records.
pub fn multi_states<'a>(
    layout: Layout,
    value_scale: LinearScale,
    size_scale: &'a BandScale,
) -> ColumnStates<'a, SubColumn> {
    let column_width = capped_bandwidth(size_scale);
    let baseline = value_scale.scaled(0.0);

    let enter_shadow = BarState {
        fill: StateValue::Constant(Fill::Solid(Color::SHADOW)),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(baseline),
        width: StateValue::Constant(column_width),
        height: StateValue::Constant(0.0),
    };
    let enter_bar = BarState {
        fill: StateValue::Computed(Box::new(|column: &SubColumn| Fill::Solid(column.fill))),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(baseline),
        width: StateValue::Constant(column_width),
        height: StateValue::Constant(0.0),
    };
    let target_shadow = BarState {
        fill: StateValue::Constant(Fill::Solid(Color::SHADOW)),
        x: StateValue::Constant(0.0),
        y: StateValue::Constant(0.0),
        width: StateValue::Constant(column_width),
        height: StateValue::Constant(layout.height),
    };
    let target_bar = BarState {
        fill: StateValue::Computed(Box::new(|column: &SubColumn| Fill::Solid(column.fill))),
        x: StateValue::Constant(0.0),
        y: StateValue::Computed(Box::new(move |column: &SubColumn| value_scale.scaled(column.value))),
        width: StateValue::Constant(column_width),
        height: StateValue::Computed(Box::new(move |column: &SubColumn| {
            layout.height - value_scale.scaled(column.value)
        })),
    };

    let translation = GroupTranslation {
        x: StateValue::Computed(Box::new(move |column: &SubColumn| {
            column.x_offset
                + size_scale
                    .position(&column.series_index.to_string())
                    .unwrap_or(0.0)
        })),
        y: StateValue::Constant(layout.margins.top),
    };

    ColumnStates {
        enter_bar,
        enter_shadow,
        target_bar,
        target_shadow,
        translation,
    }
}
