use crate::core::layout::Layout;
use crate::core::scale::{BandScale, LinearScale};
use crate::core::text::{LineFragment, TextMeasure, format_labels};
use crate::core::transition::Transition;
use crate::render::{AxisKind, AxisPlan, AxisTick, RenderOp};

/// Default tick count requested from the value scale, before nice-step
/// adjustment.
const VALUE_TICK_TARGET: usize = 10;

/// Default line budget for wrapped label-axis text.
const LABEL_MAX_LINES: usize = 2;

/// Bottom label axis for vertical-oriented graphs.
///
/// The previous label axis fades out and is removed; the new one is appended
/// at opacity 0 and fades in. Tick text wraps within one bandwidth.
pub(crate) fn label_axis_bottom(
    measure: &dyn TextMeasure,
    scale: &BandScale,
    layout: &Layout,
    is_resize: bool,
) -> Vec<RenderOp> {
    let plan = AxisPlan {
        kind: AxisKind::LabelBottom,
        translate: (
            layout.margins.left,
            layout.height + layout.margins.top + layout.inter_axis_padding,
        ),
        ticks: band_ticks(measure, scale, scale.bandwidth(), LABEL_MAX_LINES),
        fade_in: Transition::axis_fade(is_resize),
        tick_shift: 0.0,
    };

    replace_axis(plan, is_resize)
}

/// Left label axis for horizontal-oriented graphs.
///
/// Labels wrap within the left margin on a single line; domain and tick lines
/// shift right to clear the inter-axis padding.
pub(crate) fn label_axis_left(
    measure: &dyn TextMeasure,
    scale: &BandScale,
    layout: &Layout,
    is_resize: bool,
) -> Vec<RenderOp> {
    let plan = AxisPlan {
        kind: AxisKind::LabelLeft,
        translate: (layout.margins.left, layout.margins.top),
        ticks: band_ticks(measure, scale, layout.margins.left, 1),
        fade_in: Transition::axis_fade(is_resize),
        tick_shift: layout.inter_axis_padding,
    };

    replace_axis(plan, is_resize)
}

/// Left value axis for vertical-oriented graphs.
pub(crate) fn value_axis_left(
    scale: LinearScale,
    layout: &Layout,
    is_resize: bool,
) -> Vec<RenderOp> {
    let plan = AxisPlan {
        kind: AxisKind::ValueLeft,
        translate: (layout.margins.left, layout.margins.top),
        ticks: value_ticks(scale),
        fade_in: Transition::axis_fade(is_resize),
        tick_shift: 0.0,
    };

    replace_axis(plan, is_resize)
}

/// Bottom value axis for horizontal-oriented graphs.
pub(crate) fn value_axis_bottom(
    scale: LinearScale,
    layout: &Layout,
    is_resize: bool,
) -> Vec<RenderOp> {
    let plan = AxisPlan {
        kind: AxisKind::ValueBottom,
        translate: (
            layout.margins.left + layout.inter_axis_padding * 2.0,
            layout.height + layout.margins.top + layout.inter_axis_padding,
        ),
        ticks: value_ticks(scale),
        fade_in: Transition::axis_fade(is_resize),
        tick_shift: 0.0,
    };

    replace_axis(plan, is_resize)
}

fn replace_axis(plan: AxisPlan, is_resize: bool) -> Vec<RenderOp> {
    vec![
        RenderOp::ClearAxis {
            group: plan.kind.group(),
            fade: Transition::axis_fade(is_resize),
        },
        RenderOp::DrawAxis(plan),
    ]
}

/// Band ticks at band centers, with batch-wrapped label text.
fn band_ticks(
    measure: &dyn TextMeasure,
    scale: &BandScale,
    max_width: f64,
    max_lines: usize,
) -> Vec<AxisTick> {
    let labels: Vec<String> = scale.domain().map(str::to_owned).collect();
    let plans = format_labels(&labels, measure, max_width, max_lines);

    labels
        .iter()
        .zip(plans)
        .map(|(label, plan)| AxisTick {
            offset: scale.position(label).unwrap_or(0.0) + scale.bandwidth() / 2.0,
            lines: plan.lines.into_vec(),
        })
        .collect()
}

/// Value ticks; non-integer tick values render blank text.
fn value_ticks(scale: LinearScale) -> Vec<AxisTick> {
    scale
        .ticks(VALUE_TICK_TARGET)
        .into_iter()
        .map(|value| AxisTick {
            offset: scale.scaled(value),
            lines: if value.fract() == 0.0 {
                vec![LineFragment::new(format!("{}", value as i64), 0)]
            } else {
                Vec::new()
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::core::layout::{Bounds, Layout};
    use crate::core::scale::{BandScale, LinearScale, ScaleOptions};
    use crate::core::text::FixedAdvance;
    use crate::render::{AxisKind, RenderOp};

    use super::{label_axis_bottom, value_axis_left};

    #[test]
    fn label_axis_clears_then_draws_at_band_centers() {
        let layout = Layout::compose(Bounds::new(400.0, 300.0), None);
        let scale = BandScale::from_labels(
            ["A", "B"].into_iter().map(str::to_owned),
            ScaleOptions::default().with_range(0.0, layout.width),
        );

        let ops = label_axis_bottom(&FixedAdvance::new(4.0), &scale, &layout, false);

        assert!(matches!(ops[0], RenderOp::ClearAxis { .. }));
        let RenderOp::DrawAxis(plan) = &ops[1] else {
            panic!("expected DrawAxis, got {:?}", ops[1]);
        };

        assert_eq!(plan.kind, AxisKind::LabelBottom);
        assert_eq!(plan.ticks.len(), 2);
        let expected = scale.position("A").unwrap() + scale.bandwidth() / 2.0;
        assert_eq!(plan.ticks[0].offset, expected);
        assert_eq!(plan.ticks[0].lines[0].text, "A");
        assert_eq!(plan.fade_in.duration_ms, 100);
    }

    #[test]
    fn resize_suppresses_axis_fades() {
        let layout = Layout::compose(Bounds::new(400.0, 300.0), None);
        let scale = LinearScale::from_values(
            &[10.0],
            ScaleOptions::default().with_range(layout.height, 0.0),
        );

        let ops = value_axis_left(scale, &layout, true);

        let RenderOp::ClearAxis { fade, .. } = &ops[0] else {
            panic!("expected ClearAxis");
        };
        assert_eq!(fade.duration_ms, 0);
    }

    #[test]
    fn value_axis_blanks_non_integer_ticks() {
        let layout = Layout::compose(Bounds::new(400.0, 300.0), None);
        // Max 2.0 gives domain [0, 2.2] and fractional 0.2-step ticks.
        let scale = LinearScale::from_values(
            &[2.0],
            ScaleOptions::default().with_range(layout.height, 0.0),
        );

        let ops = value_axis_left(scale, &layout, false);
        let RenderOp::DrawAxis(plan) = &ops[1] else {
            panic!("expected DrawAxis");
        };

        let labeled: Vec<&str> = plan
            .ticks
            .iter()
            .flat_map(|tick| tick.lines.iter().map(|line| line.text.as_str()))
            .collect();
        assert_eq!(labeled, vec!["0", "1", "2"]);
        assert!(plan.ticks.len() > labeled.len());
    }
}
