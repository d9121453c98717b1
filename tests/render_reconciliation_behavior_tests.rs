use bargraph_rs::render::{MemorySurface, RenderOp};
use bargraph_rs::{BarGraph, BarGraphOptions};

#[derive(Clone)]
struct Row {
    label: &'static str,
    value: f64,
}

fn row(label: &'static str, value: f64) -> Row {
    Row { label, value }
}

fn options() -> BarGraphOptions<Row> {
    BarGraphOptions::new(|r: &Row| r.label.to_owned(), |r: &Row| r.value)
}

fn graph(data: Vec<Row>) -> BarGraph<Row, MemorySurface> {
    BarGraph::vertical("g", MemorySurface::new(400.0, 300.0), data, options())
}

#[test]
fn growing_data_enters_new_columns_at_zero_height() {
    let mut graph = graph(vec![row("a", 1.0), row("b", 2.0)]);
    graph.render().expect("initial render");
    graph.surface_mut().take_log();

    graph
        .update(vec![row("a", 1.0), row("b", 2.0), row("c", 3.0), row("d", 4.0)])
        .expect("update");

    assert_eq!(graph.surface().columns().len(), 4);

    let log = graph.surface_mut().take_log();
    let enters: Vec<_> = log
        .iter()
        .filter_map(|op| match op {
            RenderOp::EnterColumn { bar, .. } => Some(bar),
            _ => None,
        })
        .collect();
    assert_eq!(enters.len(), 2);
    assert!(enters.iter().all(|bar| bar.height == 0.0));
    assert!(!log.iter().any(|op| matches!(op, RenderOp::RemoveColumnsFrom { .. })));
}

#[test]
fn entered_columns_stagger_after_the_surviving_set() {
    let mut graph = graph(vec![row("a", 1.0), row("b", 2.0)]);
    graph.render().expect("initial render");
    graph.surface_mut().take_log();

    graph
        .update(vec![row("a", 1.0), row("b", 2.0), row("c", 3.0), row("d", 4.0)])
        .expect("update");

    let log = graph.surface_mut().take_log();
    let delays: Vec<(usize, u32)> = log
        .iter()
        .filter_map(|op| match op {
            RenderOp::UpdateColumn { index, transition, .. } => Some((*index, transition.delay_ms)),
            _ => None,
        })
        .collect();

    // Survivors stagger from zero. Entered columns keep their data index
    // plus the uniform (surviving - 1) slot offset, so the first entered
    // column fires strictly after the last survivor.
    assert_eq!(delays, vec![(0, 0), (1, 50), (2, 150), (3, 200)]);
}

#[test]
fn shrinking_data_removes_trailing_columns() {
    let mut graph = graph(vec![row("a", 1.0), row("b", 2.0), row("c", 3.0), row("d", 4.0)]);
    graph.render().expect("initial render");
    graph.surface_mut().take_log();

    graph.update(vec![row("a", 1.0), row("b", 2.0)]).expect("update");

    assert_eq!(graph.surface().columns().len(), 2);
    let log = graph.surface_mut().take_log();
    assert!(log.iter().any(|op| matches!(op, RenderOp::RemoveColumnsFrom { keep: 2 })));
}

#[test]
fn surviving_columns_rebind_by_position_not_label() {
    let mut graph = graph(vec![row("a", 1.0), row("b", 2.0), row("c", 3.0)]);
    graph.render().expect("initial render");

    // Dropping the middle record shifts "c" into slot 1; slot 2 is removed.
    graph.update(vec![row("a", 1.0), row("c", 3.0)]).expect("update");

    let columns = graph.surface().columns();
    assert_eq!(columns.len(), 2);
    assert!(columns[1].bar.height > columns[0].bar.height);
}

#[test]
fn updating_with_identical_data_leaves_geometry_unchanged() {
    let data = vec![row("a", 1.0), row("b", 2.0)];
    let mut graph = graph(data.clone());
    graph.render().expect("initial render");
    let before = graph.surface().columns().to_vec();

    graph.update(data).expect("update");

    assert_eq!(graph.surface().columns(), &before[..]);
}

#[test]
fn every_update_rebuilds_gradient_and_axes() {
    let mut graph = graph(vec![row("a", 1.0)]);
    graph.render().expect("initial render");
    graph.surface_mut().take_log();

    graph.update(vec![row("a", 2.0)]).expect("update");

    let log = graph.surface_mut().take_log();
    assert!(log.iter().any(|op| matches!(op, RenderOp::SetGradient(_))));
    let axis_draws = log
        .iter()
        .filter(|op| matches!(op, RenderOp::DrawAxis(_)))
        .count();
    assert_eq!(axis_draws, 2);
}
