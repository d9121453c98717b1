use tracing::debug;

use crate::api::axis;
use crate::api::options::BarGraphOptions;
use crate::core::geometry;
use crate::core::layout::Layout;
use crate::core::reconcile;
use crate::core::scale::{BandScale, LinearScale, ScaleOptions};
use crate::error::BarGraphResult;
use crate::render::{GradientSpec, RenderOp, Surface};

/// Renders the axes and bars for a horizontal-oriented bar graph.
///
/// The band scale runs down the plot height and the value scale runs across
/// the width; bars grow rightward from a fixed left offset.
pub(crate) fn render<T, S: Surface>(
    graph_id: &str,
    surface: &mut S,
    data: &[T],
    options: &BarGraphOptions<T>,
    is_resize: bool,
) -> BarGraphResult<()> {
    if data.is_empty() {
        debug!(graph_id, "horizontal render skipped: no data");
        return Ok(());
    }
    let Some(bounds) = surface.bounds() else {
        debug!(graph_id, "horizontal render skipped: no measurable bounds");
        return Ok(());
    };

    let layout = Layout::compose(bounds, options.margins);

    let label_scale = BandScale::from_data(
        data,
        |record| options.label(record),
        ScaleOptions::default().with_range(0.0, layout.height),
    );
    let value_scale = LinearScale::from_data(
        data,
        |record| options.value(record),
        ScaleOptions::default().with_range(0.0, layout.width),
    );

    let mut ops = vec![RenderOp::SetGradient(GradientSpec::new(
        graph_id,
        options.gradient,
        false,
    ))];
    ops.extend(axis::label_axis_left(
        &*surface,
        &label_scale,
        &layout,
        is_resize,
    ));
    ops.extend(axis::value_axis_bottom(value_scale, &layout, is_resize));

    let states = geometry::horizontal_states(
        layout,
        value_scale,
        &label_scale,
        &*options.get_label,
        &*options.get_value,
    );
    let columns = states.resolve(data);
    ops.extend(reconcile::plan_columns(surface.column_count(), &columns));

    debug!(
        graph_id,
        records = data.len(),
        is_resize,
        "render horizontal bar graph"
    );
    surface.apply(&ops)
}
