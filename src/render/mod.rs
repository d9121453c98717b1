mod memory;
mod ops;

pub use memory::{ColumnNode, DEFAULT_CHAR_ADVANCE, MemorySurface};
pub use ops::{AxisGroup, AxisKind, AxisPlan, AxisTick, GradientSpec, RenderOp};

use crate::core::layout::Bounds;
use crate::core::text::TextMeasure;
use crate::error::BarGraphResult;

/// Contract implemented by any rendering surface.
///
/// The engine plans deterministic [`RenderOp`] batches against the surface's
/// retained column set; the surface owns element mutation and schedules the
/// attached transitions with its host's frame scheduler. Text measurement is
/// part of the contract because label wrapping depends on rendered widths.
pub trait Surface: TextMeasure {
    /// Measured container bounds, or `None` when the container cannot be
    /// located. A `None` turns the whole render pass into a silent no-op.
    fn bounds(&self) -> Option<Bounds>;

    /// Number of bar columns currently in the live set.
    fn column_count(&self) -> usize;

    /// Applies one planned batch, in order.
    fn apply(&mut self, ops: &[RenderOp]) -> BarGraphResult<()>;
}
