mod axis;
mod chart;
mod horizontal;
mod multi;
mod options;
mod vertical;

pub use chart::{BarGraph, Orientation};
pub use options::{BarGraphOptions, LabelFn, MultiBarGraphOptions, SeriesBar, ValueFn};
