use tracing::debug;

use crate::api::axis;
use crate::api::options::MultiBarGraphOptions;
use crate::core::geometry::{self, SubColumn};
use crate::core::layout::Layout;
use crate::core::reconcile;
use crate::core::scale::{BandScale, LinearScale, ScaleOptions};
use crate::error::BarGraphResult;
use crate::render::{GradientSpec, RenderOp, Surface};

/// Inter-column padding inside one category band.
const SUB_COLUMN_PADDING: f64 = 0.05;

/// Renders a multi-series vertical bar graph.
///
/// Each record expands into one sub-column per series descriptor, placed
/// inside its category band by a synthetic size-based band scale. All series
/// share one value scale spanning the global maximum.
pub(crate) fn render<T, S: Surface>(
    graph_id: &str,
    surface: &mut S,
    data: &[T],
    options: &MultiBarGraphOptions<T>,
    is_resize: bool,
) -> BarGraphResult<()> {
    if data.is_empty() {
        debug!(graph_id, "multi-series render skipped: no data");
        return Ok(());
    }
    let Some(bounds) = surface.bounds() else {
        debug!(graph_id, "multi-series render skipped: no measurable bounds");
        return Ok(());
    };

    let layout = Layout::compose(bounds, options.margins);

    let label_scale = BandScale::from_data(
        data,
        |record| options.label(record),
        ScaleOptions::default().with_range(0.0, layout.width),
    );
    let size_scale = BandScale::from_size(
        options.bars.len(),
        ScaleOptions::default()
            .with_range(0.0, label_scale.bandwidth())
            .with_padding(SUB_COLUMN_PADDING),
    );

    let all_values: Vec<f64> = data
        .iter()
        .flat_map(|record| options.bars.iter().map(|bar| bar.value(record)))
        .collect();
    let value_scale = LinearScale::from_values(
        &all_values,
        ScaleOptions::default().with_range(layout.height, 0.0),
    );

    let mut ops = vec![RenderOp::SetGradient(GradientSpec::new(
        graph_id,
        options.gradient,
        false,
    ))];
    ops.extend(axis::label_axis_bottom(
        &*surface,
        &label_scale,
        &layout,
        is_resize,
    ));
    ops.extend(axis::value_axis_left(value_scale, &layout, is_resize));

    let sub_columns = expand_columns(data, options, &label_scale, &layout);
    let states = geometry::multi_states(layout, value_scale, &size_scale);
    let columns = states.resolve(&sub_columns);
    ops.extend(reconcile::plan_columns(surface.column_count(), &columns));

    debug!(
        graph_id,
        records = data.len(),
        series = options.bars.len(),
        is_resize,
        "render multi-series bar graph"
    );
    surface.apply(&ops)
}

/// Expands each record into one [`SubColumn`] per series, in record-major
/// order. Tooltip text is formatted here so the interaction layer stays
/// format-agnostic.
pub(crate) fn expand_columns<T>(
    data: &[T],
    options: &MultiBarGraphOptions<T>,
    label_scale: &BandScale,
    layout: &Layout,
) -> Vec<SubColumn> {
    data.iter()
        .flat_map(|record| {
            let x_offset = layout.margins.left
                + label_scale.position(&options.label(record)).unwrap_or(0.0);

            options.bars.iter().enumerate().map(move |(index, bar)| {
                let label = bar.label(record);
                let value = bar.value(record);
                SubColumn {
                    series_index: index,
                    fill: bar.fill,
                    tooltip: format!("{label}: {value}"),
                    label,
                    value,
                    x_offset,
                }
            })
        })
        .collect()
}
