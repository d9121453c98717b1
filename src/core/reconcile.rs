use tracing::trace;

use crate::core::geometry::ResolvedColumn;
use crate::core::transition::Transition;
use crate::render::RenderOp;

/// Plans one reconciliation pass of the live column set against new data.
///
/// Binding is positional: columns and records correspond by index only, so a
/// shrinking data array always removes trailing columns, whichever records the
/// caller actually dropped. This mirrors the documented non-keyed contract;
/// keyed diffing is deliberately not performed.
///
/// Emitted order: exit (immediate removal, no exit animation), update
/// (staggered re-target of survivors), enter (append at initial geometry,
/// then re-target through the same update path with a continued stagger).
pub fn plan_columns(existing_count: usize, columns: &[ResolvedColumn]) -> Vec<RenderOp> {
    let new_len = columns.len();
    let surviving = existing_count.min(new_len);

    let mut ops = Vec::with_capacity(new_len * 2 + 1);

    if existing_count > new_len {
        ops.push(RenderOp::RemoveColumnsFrom { keep: new_len });
    }

    for (index, column) in columns[..surviving].iter().enumerate() {
        ops.push(RenderOp::UpdateColumn {
            index,
            translate: column.translate,
            bar: column.target_bar,
            shadow: column.target_shadow,
            transition: Transition::bar_stagger(index, 0),
        });
    }

    for (entered, column) in columns[surviving..].iter().enumerate() {
        let index = surviving + entered;
        ops.push(RenderOp::EnterColumn {
            translate: column.translate,
            bar: column.enter_bar,
            shadow: column.enter_shadow,
        });
        ops.push(RenderOp::UpdateColumn {
            index,
            translate: column.translate,
            bar: column.target_bar,
            shadow: column.target_shadow,
            transition: Transition::bar_stagger(index, surviving),
        });
    }

    trace!(
        existing = existing_count,
        new_len,
        removed = existing_count.saturating_sub(new_len),
        entered = new_len.saturating_sub(surviving),
        "planned column reconciliation"
    );

    ops
}

#[cfg(test)]
mod tests {
    use crate::core::geometry::{ColumnVisual, Fill, ResolvedColumn};
    use crate::core::transition::{BAR_TRANSITION_MS, STAGGER_DELAY_MS};
    use crate::render::RenderOp;

    use super::plan_columns;

    fn column(x: f64) -> ResolvedColumn {
        let visual = ColumnVisual {
            fill: Fill::Gradient,
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 20.0,
        };
        ResolvedColumn {
            translate: (x, 0.0),
            enter_bar: visual,
            enter_shadow: visual,
            target_bar: visual,
            target_shadow: visual,
        }
    }

    #[test]
    fn fresh_render_enters_every_column() {
        let columns = vec![column(0.0), column(50.0), column(100.0)];
        let ops = plan_columns(0, &columns);

        let enters = ops
            .iter()
            .filter(|op| matches!(op, RenderOp::EnterColumn { .. }))
            .count();
        let updates = ops
            .iter()
            .filter(|op| matches!(op, RenderOp::UpdateColumn { .. }))
            .count();

        assert_eq!(enters, 3);
        assert_eq!(updates, 3);
        assert!(
            !ops.iter()
                .any(|op| matches!(op, RenderOp::RemoveColumnsFrom { .. }))
        );
    }

    #[test]
    fn shrinking_removes_trailing_columns_only() {
        let columns = vec![column(0.0)];
        let ops = plan_columns(3, &columns);

        assert!(matches!(ops[0], RenderOp::RemoveColumnsFrom { keep: 1 }));
        assert!(matches!(ops[1], RenderOp::UpdateColumn { index: 0, .. }));
        assert_eq!(ops.len(), 2);
    }

    #[test]
    fn survivors_stagger_by_index_and_entries_continue_after_them() {
        let columns = vec![column(0.0), column(1.0), column(2.0), column(3.0)];
        let ops = plan_columns(2, &columns);

        let delays: Vec<(usize, u32)> = ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::UpdateColumn {
                    index, transition, ..
                } => Some((*index, transition.delay_ms)),
                _ => None,
            })
            .collect();

        // Survivors: index * 50. Entries keep their data index, plus the
        // uniform (existing - 1) * 50 offset, so they fire strictly after
        // every survivor.
        assert_eq!(
            delays,
            vec![
                (0, 0),
                (1, STAGGER_DELAY_MS),
                (2, 3 * STAGGER_DELAY_MS),
                (3, 4 * STAGGER_DELAY_MS),
            ]
        );

        for op in &ops {
            if let RenderOp::UpdateColumn { transition, .. } = op {
                assert_eq!(transition.duration_ms, BAR_TRANSITION_MS);
            }
        }
    }

    #[test]
    fn same_data_replan_is_update_only() {
        let columns = vec![column(0.0), column(1.0)];
        let ops = plan_columns(2, &columns);

        assert_eq!(ops.len(), 2);
        assert!(
            ops.iter()
                .all(|op| matches!(op, RenderOp::UpdateColumn { .. }))
        );
    }
}
