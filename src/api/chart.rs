use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::options::{BarGraphOptions, MultiBarGraphOptions};
use crate::api::{horizontal, multi, vertical};
use crate::core::layout::Bounds;
use crate::error::BarGraphResult;
use crate::interaction;
use crate::render::Surface;

/// Chart orientation, dispatched to the matching render strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
    MultiVertical,
}

enum Variant<T> {
    Vertical(BarGraphOptions<T>),
    Horizontal(BarGraphOptions<T>),
    MultiVertical(MultiBarGraphOptions<T>),
}

/// Bar graph facade owning one surface, the current data, and the orientation
/// strategy.
///
/// `update` re-renders with animation; `resize` re-measures the surface and
/// re-renders without animation, and only when the measured size actually
/// changed. Construction does not render; hosts call [`BarGraph::render`]
/// once wiring is complete.
pub struct BarGraph<T, S: Surface> {
    id: String,
    surface: S,
    data: Vec<T>,
    variant: Variant<T>,
    last_bounds: Option<Bounds>,
}

impl<T, S: Surface> BarGraph<T, S> {
    pub fn vertical(
        id: impl Into<String>,
        surface: S,
        data: Vec<T>,
        options: BarGraphOptions<T>,
    ) -> Self {
        Self::with_variant(id, surface, data, Variant::Vertical(options))
    }

    pub fn horizontal(
        id: impl Into<String>,
        surface: S,
        data: Vec<T>,
        options: BarGraphOptions<T>,
    ) -> Self {
        Self::with_variant(id, surface, data, Variant::Horizontal(options))
    }

    pub fn multi_vertical(
        id: impl Into<String>,
        surface: S,
        data: Vec<T>,
        options: MultiBarGraphOptions<T>,
    ) -> Self {
        Self::with_variant(id, surface, data, Variant::MultiVertical(options))
    }

    fn with_variant(id: impl Into<String>, surface: S, data: Vec<T>, variant: Variant<T>) -> Self {
        let last_bounds = surface.bounds();
        Self {
            id: id.into(),
            surface,
            data,
            variant,
            last_bounds,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match self.variant {
            Variant::Vertical(_) => Orientation::Vertical,
            Variant::Horizontal(_) => Orientation::Horizontal,
            Variant::MultiVertical(_) => Orientation::MultiVertical,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Renders with the current data, animating enters and updates.
    pub fn render(&mut self) -> BarGraphResult<()> {
        self.render_pass(false)
    }

    /// Replaces the data set and re-renders with animation.
    pub fn update(&mut self, data: Vec<T>) -> BarGraphResult<()> {
        self.data = data;
        self.render_pass(false)
    }

    /// Re-measures the surface and re-renders without entrance animation.
    ///
    /// A resize whose measured bounds match the last known bounds is a no-op,
    /// so redundant host resize events stay cheap.
    pub fn resize(&mut self) -> BarGraphResult<()> {
        let Some(bounds) = self.surface.bounds() else {
            return Ok(());
        };
        if self.last_bounds == Some(bounds) {
            debug!(id = %self.id, "resize skipped: bounds unchanged");
            return Ok(());
        }

        self.last_bounds = Some(bounds);
        self.render_pass(true)
    }

    fn render_pass(&mut self, is_resize: bool) -> BarGraphResult<()> {
        match &self.variant {
            Variant::Vertical(options) => {
                vertical::render(&self.id, &mut self.surface, &self.data, options, is_resize)
            }
            Variant::Horizontal(options) => {
                horizontal::render(&self.id, &mut self.surface, &self.data, options, is_resize)
            }
            Variant::MultiVertical(options) => {
                multi::render(&self.id, &mut self.surface, &self.data, options, is_resize)
            }
        }
    }

    /// Pointer entered the bar column at `index`: dims siblings and shows the
    /// tooltip with `"label: value"` text. Unknown indices are ignored.
    pub fn pointer_enter(&mut self, index: usize) -> BarGraphResult<()> {
        let Some(text) = self.hover_text(index) else {
            return Ok(());
        };
        interaction::pointer_enter(&mut self.surface, index, &text)
    }

    /// Pointer moved while hovering; repositions the shared tooltip.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        interaction::pointer_move(x, y);
    }

    /// Pointer left the column set: opacities reset, tooltip hides.
    pub fn pointer_leave(&mut self) -> BarGraphResult<()> {
        interaction::pointer_leave(&mut self.surface)
    }

    fn hover_text(&self, index: usize) -> Option<String> {
        match &self.variant {
            Variant::Vertical(options) | Variant::Horizontal(options) => {
                let record = self.data.get(index)?;
                Some(format!("{}: {}", options.label(record), options.value(record)))
            }
            Variant::MultiVertical(options) => {
                if options.bars.is_empty() {
                    return None;
                }
                let record = self.data.get(index / options.bars.len())?;
                let bar = &options.bars[index % options.bars.len()];
                Some(format!("{}: {}", bar.label(record), bar.value(record)))
            }
        }
    }
}
