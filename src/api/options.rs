use crate::core::color::Color;
use crate::core::layout::Margins;

pub type LabelFn<T> = Box<dyn Fn(&T) -> String>;
pub type ValueFn<T> = Box<dyn Fn(&T) -> f64>;

/// Options for single-series bar graphs (vertical and horizontal).
///
/// Records stay opaque: every access goes through the accessor closures. A
/// `get_value` returning NaN is a caller contract violation and propagates
/// into geometry unguarded.
pub struct BarGraphOptions<T> {
    pub(crate) get_label: LabelFn<T>,
    pub(crate) get_value: ValueFn<T>,
    pub(crate) gradient: Option<(Color, Color)>,
    pub(crate) margins: Option<Margins>,
}

impl<T> BarGraphOptions<T> {
    pub fn new(
        get_label: impl Fn(&T) -> String + 'static,
        get_value: impl Fn(&T) -> f64 + 'static,
    ) -> Self {
        Self {
            get_label: Box::new(get_label),
            get_value: Box::new(get_value),
            gradient: None,
            margins: None,
        }
    }

    #[must_use]
    pub fn with_gradient(mut self, start: Color, end: Color) -> Self {
        self.gradient = Some((start, end));
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    #[must_use]
    pub fn label(&self, record: &T) -> String {
        (self.get_label)(record)
    }

    #[must_use]
    pub fn value(&self, record: &T) -> f64 {
        (self.get_value)(record)
    }
}

/// One series of a multi-series graph: per-series fill and accessors.
pub struct SeriesBar<T> {
    pub(crate) fill: Color,
    pub(crate) get_label: LabelFn<T>,
    pub(crate) get_value: ValueFn<T>,
}

impl<T> SeriesBar<T> {
    pub fn new(
        fill: Color,
        get_label: impl Fn(&T) -> String + 'static,
        get_value: impl Fn(&T) -> f64 + 'static,
    ) -> Self {
        Self {
            fill,
            get_label: Box::new(get_label),
            get_value: Box::new(get_value),
        }
    }

    #[must_use]
    pub fn label(&self, record: &T) -> String {
        (self.get_label)(record)
    }

    #[must_use]
    pub fn value(&self, record: &T) -> f64 {
        (self.get_value)(record)
    }
}

/// Options for multi-series vertical graphs: the category label accessor plus
/// one [`SeriesBar`] per sub-column, replacing the single `get_value`.
pub struct MultiBarGraphOptions<T> {
    pub(crate) get_label: LabelFn<T>,
    pub(crate) bars: Vec<SeriesBar<T>>,
    pub(crate) gradient: Option<(Color, Color)>,
    pub(crate) margins: Option<Margins>,
}

impl<T> MultiBarGraphOptions<T> {
    pub fn new(get_label: impl Fn(&T) -> String + 'static, bars: Vec<SeriesBar<T>>) -> Self {
        Self {
            get_label: Box::new(get_label),
            bars,
            gradient: None,
            margins: None,
        }
    }

    #[must_use]
    pub fn with_gradient(mut self, start: Color, end: Color) -> Self {
        self.gradient = Some((start, end));
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    #[must_use]
    pub fn label(&self, record: &T) -> String {
        (self.get_label)(record)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.bars.len()
    }
}
