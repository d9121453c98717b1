use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::geometry::ColumnVisual;
use crate::core::text::LineFragment;
use crate::core::transition::Transition;

/// Axis element groups tracked by the surface; each render pass replaces one
/// group wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisGroup {
    Label,
    Value,
}

/// Placement of one axis around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    LabelBottom,
    LabelLeft,
    ValueLeft,
    ValueBottom,
}

impl AxisKind {
    #[must_use]
    pub fn group(self) -> AxisGroup {
        match self {
            Self::LabelBottom | Self::LabelLeft => AxisGroup::Label,
            Self::ValueLeft | Self::ValueBottom => AxisGroup::Value,
        }
    }
}

/// One tick: an offset along the axis plus zero or more label lines.
///
/// Value-axis ticks with suppressed (non-integer) labels carry no lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub offset: f64,
    pub lines: Vec<LineFragment>,
}

/// Fully laid-out axis for one render pass, appended at opacity 0 and faded in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPlan {
    pub kind: AxisKind,
    pub translate: (f64, f64),
    pub ticks: Vec<AxisTick>,
    pub fade_in: Transition,
    /// Horizontal shift of the domain/tick lines, used by the left label axis
    /// to clear the inter-axis padding.
    pub tick_shift: f64,
}

/// Linear gradient definition backing `Fill::Gradient`, rebuilt every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub id: String,
    pub start: Color,
    pub end: Color,
    pub vertical: bool,
}

impl GradientSpec {
    #[must_use]
    pub fn new(graph_id: &str, colors: Option<(Color, Color)>, vertical: bool) -> Self {
        let (first, second) = colors.unwrap_or((Color::GRADIENT_START, Color::GRADIENT_END));
        // Horizontal gradients reverse the stop order.
        let (start, end) = if vertical {
            (first, second)
        } else {
            (second, first)
        };

        Self {
            id: format!("{graph_id}-bar-gradient"),
            start,
            end,
            vertical,
        }
    }
}

/// One mutation of the live surface tree.
///
/// Transitions are descriptions only; the surface schedules them and the
/// engine never awaits completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderOp {
    /// Replaces the gradient definition.
    SetGradient(GradientSpec),
    /// Fades out and removes every axis in `group`.
    ClearAxis { group: AxisGroup, fade: Transition },
    /// Appends a freshly laid-out axis.
    DrawAxis(AxisPlan),
    /// Removes all bar columns at index `keep` and beyond, immediately.
    RemoveColumnsFrom { keep: usize },
    /// Appends a new bar column at its initial geometry, without animation.
    EnterColumn {
        translate: (f64, f64),
        bar: ColumnVisual,
        shadow: ColumnVisual,
    },
    /// Re-targets an existing bar column to new geometry over a transition.
    UpdateColumn {
        index: usize,
        translate: (f64, f64),
        bar: ColumnVisual,
        shadow: ColumnVisual,
        transition: Transition,
    },
    /// Sets one column's opacity (hover highlight).
    SetColumnOpacity { index: usize, opacity: f64 },
    /// Sets every column's opacity (hover dim / reset).
    SetAllColumnsOpacity { opacity: f64 },
}
