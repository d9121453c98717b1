use crate::core::geometry::ColumnVisual;
use crate::core::layout::Bounds;
use crate::core::text::{FixedAdvance, TextMeasure};
use crate::error::{BarGraphError, BarGraphResult};
use crate::render::ops::{AxisGroup, AxisPlan, GradientSpec, RenderOp};
use crate::render::Surface;

/// Default per-character advance of the built-in measure.
pub const DEFAULT_CHAR_ADVANCE: f64 = 7.0;

/// One retained bar column: foreground bar + background shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnNode {
    pub translate: (f64, f64),
    pub bar: ColumnVisual,
    pub shadow: ColumnVisual,
    pub opacity: f64,
}

/// In-memory retained surface used by tests and headless embedding.
///
/// Ops apply instantly: transitions jump straight to their target geometry,
/// which makes settled end states directly assertable. Every applied op is
/// also logged verbatim so tests can inspect the schedule that a real backend
/// would have received.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    bounds: Option<Bounds>,
    measure: Option<FixedAdvance>,
    columns: Vec<ColumnNode>,
    label_axis: Option<AxisPlan>,
    value_axis: Option<AxisPlan>,
    gradient: Option<GradientSpec>,
    log: Vec<RenderOp>,
}

impl MemorySurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: Some(Bounds::new(width, height)),
            measure: Some(FixedAdvance::new(DEFAULT_CHAR_ADVANCE)),
            ..Self::default()
        }
    }

    /// A surface whose container cannot be measured; every render is a no-op.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_char_advance(mut self, advance: f64) -> Self {
        self.measure = Some(FixedAdvance::new(advance));
        self
    }

    /// Simulates a container resize.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.bounds = Some(Bounds::new(width, height));
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnNode] {
        &self.columns
    }

    #[must_use]
    pub fn label_axis(&self) -> Option<&AxisPlan> {
        self.label_axis.as_ref()
    }

    #[must_use]
    pub fn value_axis(&self) -> Option<&AxisPlan> {
        self.value_axis.as_ref()
    }

    #[must_use]
    pub fn gradient(&self) -> Option<&GradientSpec> {
        self.gradient.as_ref()
    }

    /// Ops applied since the last [`Self::take_log`].
    #[must_use]
    pub fn log(&self) -> &[RenderOp] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<RenderOp> {
        std::mem::take(&mut self.log)
    }

    /// Pretty-printed JSON of the op log, for snapshot assertions and
    /// embedder debugging.
    pub fn log_json_pretty(&self) -> BarGraphResult<String> {
        serde_json::to_string_pretty(&self.log)
            .map_err(|e| BarGraphError::Snapshot(e.to_string()))
    }

    fn column_mut(&mut self, index: usize) -> BarGraphResult<&mut ColumnNode> {
        let count = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or(BarGraphError::ColumnIndex { index, count })
    }

    fn apply_one(&mut self, op: &RenderOp) -> BarGraphResult<()> {
        match op {
            RenderOp::SetGradient(spec) => {
                self.gradient = Some(spec.clone());
            }
            RenderOp::ClearAxis { group, .. } => match group {
                AxisGroup::Label => self.label_axis = None,
                AxisGroup::Value => self.value_axis = None,
            },
            RenderOp::DrawAxis(plan) => match plan.kind.group() {
                AxisGroup::Label => self.label_axis = Some(plan.clone()),
                AxisGroup::Value => self.value_axis = Some(plan.clone()),
            },
            RenderOp::RemoveColumnsFrom { keep } => {
                self.columns.truncate(*keep);
            }
            RenderOp::EnterColumn {
                translate,
                bar,
                shadow,
            } => {
                self.columns.push(ColumnNode {
                    translate: *translate,
                    bar: *bar,
                    shadow: *shadow,
                    opacity: 1.0,
                });
            }
            RenderOp::UpdateColumn {
                index,
                translate,
                bar,
                shadow,
                ..
            } => {
                let node = self.column_mut(*index)?;
                node.translate = *translate;
                node.bar = *bar;
                node.shadow = *shadow;
            }
            RenderOp::SetColumnOpacity { index, opacity } => {
                self.column_mut(*index)?.opacity = *opacity;
            }
            RenderOp::SetAllColumnsOpacity { opacity } => {
                for node in &mut self.columns {
                    node.opacity = *opacity;
                }
            }
        }
        Ok(())
    }
}

impl TextMeasure for MemorySurface {
    fn text_width(&self, text: &str) -> f64 {
        self.measure
            .unwrap_or(FixedAdvance::new(DEFAULT_CHAR_ADVANCE))
            .text_width(text)
    }
}

impl Surface for MemorySurface {
    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn apply(&mut self, ops: &[RenderOp]) -> BarGraphResult<()> {
        for op in ops {
            self.apply_one(op)?;
            self.log.push(op.clone());
        }
        Ok(())
    }
}
