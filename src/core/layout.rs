use serde::{Deserialize, Serialize};

pub const DEFAULT_INTER_AXIS_PADDING: f64 = 20.0;

/// Pixel margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50.0, 50.0, 50.0, 50.0)
    }
}

/// Measured pixel size of the hosting container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Usable plot rectangle for one render pass.
///
/// `width`/`height` may be negative when the container is smaller than its
/// margins. Degenerate layouts propagate un-clamped; downstream geometry
/// collapses to zero-size bars instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub inter_axis_padding: f64,
}

impl Layout {
    /// Derives the plot rectangle from the container bounds.
    ///
    /// Height subtracts the inter-axis padding once, leaving room between the
    /// value axis and the plot edge.
    #[must_use]
    pub fn compose(bounds: Bounds, margins: Option<Margins>) -> Self {
        Self::compose_with_padding(bounds, margins, DEFAULT_INTER_AXIS_PADDING)
    }

    #[must_use]
    pub fn compose_with_padding(
        bounds: Bounds,
        margins: Option<Margins>,
        inter_axis_padding: f64,
    ) -> Self {
        let margins = margins.unwrap_or_default();

        Self {
            height: bounds.height - margins.bottom - margins.top - inter_axis_padding,
            width: bounds.width - margins.left - margins.right,
            margins,
            inter_axis_padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, Layout, Margins};

    #[test]
    fn compose_subtracts_margins_and_axis_padding() {
        let layout = Layout::compose(Bounds::new(400.0, 300.0), None);

        assert_eq!(layout.width, 300.0);
        assert_eq!(layout.height, 180.0);
        assert_eq!(layout.inter_axis_padding, 20.0);
    }

    #[test]
    fn compose_keeps_caller_margins() {
        let margins = Margins::new(10.0, 20.0, 30.0, 40.0);
        let layout = Layout::compose(Bounds::new(400.0, 300.0), Some(margins));

        assert_eq!(layout.width, 400.0 - 40.0 - 20.0);
        assert_eq!(layout.height, 300.0 - 10.0 - 30.0 - 20.0);
        assert_eq!(layout.margins, margins);
    }

    #[test]
    fn compose_propagates_negative_plot_sizes() {
        let layout = Layout::compose(Bounds::new(60.0, 40.0), None);

        assert!(layout.width < 0.0);
        assert!(layout.height < 0.0);
    }
}
