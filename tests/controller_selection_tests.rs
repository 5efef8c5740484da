use std::cell::RefCell;
use std::rc::Rc;

use variant_scatter::PlotError;
use variant_scatter::animation::ManualClock;
use variant_scatter::api::{BrushCommitted, PlotConfig, ScatterPlotController};
use variant_scatter::core::{PlotLayout, Point, Viewport};
use variant_scatter::interaction::{BrushMode, BrushRectangle};
use variant_scatter::render::{Color, NullRenderer, Rgb8};
use variant_scatter::sync::{DetailPanelClient, DetailRequest, HighlightRequest, ViewerSync};

#[derive(Clone, Default)]
struct RecordingViewer {
    highlights: Rc<RefCell<Vec<HighlightRequest>>>,
    loads: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl ViewerSync for RecordingViewer {
    fn highlight(&mut self, request: &HighlightRequest) -> Result<(), PlotError> {
        self.highlights.borrow_mut().push(request.clone());
        if self.fail {
            return Err(PlotError::Sync("viewer offline".to_owned()));
        }
        Ok(())
    }

    fn load_structure(&mut self, structure_id: &str) -> Result<(), PlotError> {
        self.loads.borrow_mut().push(structure_id.to_owned());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingDetailPanel {
    requests: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl DetailPanelClient for RecordingDetailPanel {
    fn request(&mut self, request: &DetailRequest) -> Result<(), PlotError> {
        self.requests.borrow_mut().push(request.path_and_query());
        if self.fail {
            return Err(PlotError::Sync("network down".to_owned()));
        }
        Ok(())
    }
}

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

struct Harness {
    plot: ScatterPlotController<NullRenderer>,
    viewer: RecordingViewer,
    detail: RecordingDetailPanel,
    clock: ManualClock,
}

fn build(viewer: RecordingViewer, detail: RecordingDetailPanel) -> Harness {
    let clock = ManualClock::new();
    let config = PlotConfig::new(Viewport::new(550, 440), -5.0, 5.0).with_layout(PlotLayout::fixed());
    let plot = ScatterPlotController::new(NullRenderer::default(), viewer.clone(), detail.clone(), config)
        .expect("plot init")
        .with_time_source(clock.clone());
    Harness {
        plot,
        viewer,
        detail,
        clock,
    }
}

fn harness() -> Harness {
    build(RecordingViewer::default(), RecordingDetailPanel::default())
}

fn dataset() -> Vec<Point> {
    vec![
        Point::new("v1", 12, 0.0, 10.5, RED),
        Point::new("v2", 40, 4.0, 10.5, BLUE),
        Point::new("v3", 57, 0.5, 5.25, BLUE),
    ]
}

fn drag(plot: &mut ScatterPlotController<NullRenderer>, from: (f64, f64), to: (f64, f64)) -> BrushCommitted {
    assert!(plot.pointer_down(from.0, from.1));
    plot.pointer_move(to.0, to.1);
    plot.pointer_up(to.0, to.1).expect("commit")
}

#[test]
fn zero_effect_maps_to_plot_centre_and_is_brushable() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");

    assert_eq!(h.plot.map_x_to_pixel(0.0), 230.0);
    assert_eq!(h.plot.map_pixel_to_x(230.0), 0.0);
    assert_eq!(h.plot.map_y_to_pixel(10.5), 200.0);
    assert_eq!(h.plot.map_pixel_to_y(400.0), 0.0);

    let event = drag(&mut h.plot, (200.0, 0.0), (260.0, 400.0));
    assert!(event.selection.contains("v1"));

    let event = drag(&mut h.plot, (0.0, 0.0), (50.0, 400.0));
    assert!(!event.selection.contains("v1"));
    assert!(event.selection.is_empty());
}

#[test]
fn selection_is_forwarded_to_viewer_and_detail_panel() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");

    let event = drag(&mut h.plot, (200.0, 0.0), (260.0, 400.0));
    assert_eq!(event.selection.ids(), ["v1".to_owned(), "v3".to_owned()]);
    assert!(event.report.is_complete());
    assert_eq!(h.plot.selection(), &event.selection);

    assert_eq!(*h.detail.requests.borrow(), vec!["/variant?ids=v1,v3".to_owned()]);

    let highlights = h.viewer.highlights.borrow();
    assert_eq!(highlights.len(), 1);
    let residues: Vec<i32> = highlights[0]
        .data
        .iter()
        .map(|entry| entry.residue_number)
        .collect();
    assert_eq!(residues, vec![12, 57]);
    assert_eq!(highlights[0].data[0].color, Rgb8 { r: 255, g: 0, b: 0 });
    assert_eq!(highlights[0].data[1].color, Rgb8 { r: 0, g: 0, b: 255 });
    assert_eq!(
        highlights[0].non_selected_color,
        Rgb8 {
            r: 255,
            g: 255,
            b: 255
        }
    );
}

#[test]
fn zero_area_brush_clears_everything_downstream() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");
    drag(&mut h.plot, (200.0, 0.0), (260.0, 400.0));

    let event = drag(&mut h.plot, (230.0, 10.0), (230.0, 390.0));
    assert!(event.commit.is_cleared());
    assert!(event.selection.is_empty());
    assert!(h.plot.selection().is_empty());

    assert_eq!(
        h.detail.requests.borrow().last().map(String::as_str),
        Some("/variant?ids=")
    );
    let highlights = h.viewer.highlights.borrow();
    assert!(highlights.last().expect("clear highlight").is_clear());
}

#[test]
fn clear_selection_notifies_collaborators() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");

    let event = h.plot.clear_selection();
    assert!(event.selection.is_empty());
    assert_eq!(*h.detail.requests.borrow(), vec!["/variant?ids=".to_owned()]);
    assert!(h.viewer.highlights.borrow()[0].data.is_empty());
}

#[test]
fn brush_bounds_are_inclusive() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");

    let exact = BrushRectangle {
        x0: 230.0,
        y0: 200.0,
        x1: 230.5,
        y1: 210.0,
    };
    let ids: Vec<&str> = h
        .plot
        .points_in_rectangle(exact)
        .into_iter()
        .map(|point| point.id.as_str())
        .collect();
    assert_eq!(ids, vec!["v1"]);

    let just_past = BrushRectangle {
        x0: 230.000_001,
        ..exact
    };
    assert!(h.plot.points_in_rectangle(just_past).is_empty());
}

#[test]
fn non_finite_points_are_never_selected() {
    let mut h = harness();
    let mut points = dataset();
    points.push(Point::new("nan", 99, f64::NAN, 10.0, RED));
    h.plot.set_data(points).expect("set data");

    let event = drag(&mut h.plot, (0.0, 0.0), (460.0, 400.0));
    assert_eq!(event.selection.len(), 3);
    assert!(!event.selection.contains("nan"));
}

#[test]
fn set_data_does_not_reevaluate_the_brush() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");
    drag(&mut h.plot, (200.0, 0.0), (260.0, 400.0));
    let requests_before = h.detail.requests.borrow().len();

    h.plot
        .set_data(vec![Point::new("v9", 3, 0.0, 10.5, RED)])
        .expect("replace data");

    assert_eq!(h.plot.selection().ids(), ["v1".to_owned(), "v3".to_owned()]);
    assert_eq!(h.detail.requests.borrow().len(), requests_before);
    assert!(h.plot.selected_points().is_empty());
}

#[test]
fn subscribers_receive_exactly_one_event_per_commit() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");
    let seen = Rc::new(RefCell::new(Vec::<usize>::new()));
    let sink = Rc::clone(&seen);
    let id = h
        .plot
        .on_brush_committed(move |event| sink.borrow_mut().push(event.selection.len()));

    assert!(h.plot.pointer_down(200.0, 0.0));
    h.plot.pointer_move(260.0, 400.0);
    h.plot.pointer_up(260.0, 400.0);
    assert!(h.plot.pointer_up(260.0, 400.0).is_none());
    h.plot.pointer_move(10.0, 10.0);

    assert_eq!(*seen.borrow(), vec![2]);

    assert!(h.plot.unsubscribe(id));
    assert!(!h.plot.unsubscribe(id));
    drag(&mut h.plot, (0.0, 0.0), (460.0, 400.0));
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(h.plot.subscriber_count(), 0);
}

#[test]
fn restarted_drag_uses_last_anchor() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");

    assert!(h.plot.pointer_down(0.0, 0.0));
    h.plot.pointer_move(460.0, 400.0);
    assert!(h.plot.pointer_down(400.0, 0.0));
    assert_eq!(h.plot.brush_mode(), BrushMode::Dragging);
    let event = h.plot.pointer_up(460.0, 400.0).expect("commit");

    assert_eq!(event.selection.ids(), ["v2".to_owned()]);
    assert_eq!(h.detail.requests.borrow().len(), 1);
}

#[test]
fn cancelled_drag_keeps_previous_selection() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");
    drag(&mut h.plot, (200.0, 0.0), (260.0, 400.0));

    h.plot.pointer_down(0.0, 0.0);
    assert!(h.plot.cancel_brush());
    assert!(h.plot.pointer_up(460.0, 400.0).is_none());
    assert_eq!(h.plot.selection().len(), 2);
    assert_eq!(h.detail.requests.borrow().len(), 1);
}

#[test]
fn failing_collaborators_do_not_break_selection() {
    let viewer = RecordingViewer {
        fail: true,
        ..RecordingViewer::default()
    };
    let detail = RecordingDetailPanel {
        fail: true,
        ..RecordingDetailPanel::default()
    };
    let mut h = build(viewer, detail);
    h.plot.set_data(dataset()).expect("set data");

    let event = drag(&mut h.plot, (200.0, 0.0), (260.0, 400.0));
    assert_eq!(event.selection.len(), 2);
    assert!(!event.report.highlight_delivered);
    assert!(!event.report.detail_requested);
    assert_eq!(h.viewer.highlights.borrow().len(), 1);
    assert_eq!(h.detail.requests.borrow().len(), 1);
    assert_eq!(h.plot.selection().len(), 2);
}

#[test]
fn load_structure_reaches_viewer() {
    let mut h = harness();
    h.plot.load_structure("1cbs").expect("load");
    h.plot.load_structure("4hhb").expect("load");
    assert_eq!(*h.viewer.loads.borrow(), vec!["1cbs".to_owned(), "4hhb".to_owned()]);
}

#[test]
fn degenerate_domain_fails_initialization() {
    let config = PlotConfig::new(Viewport::new(800, 500), 2.0, 2.0);
    let result = ScatterPlotController::new(
        NullRenderer::default(),
        RecordingViewer::default(),
        RecordingDetailPanel::default(),
        config,
    );
    assert!(matches!(result, Err(PlotError::InvalidScale { .. })));
}

#[test]
fn container_too_small_fails_initialization() {
    let config = PlotConfig::new(Viewport::new(80, 50), -1.0, 1.0);
    let result = ScatterPlotController::new(
        NullRenderer::default(),
        RecordingViewer::default(),
        RecordingDetailPanel::default(),
        config,
    );
    assert!(matches!(result, Err(PlotError::InvalidViewport { .. })));
}

#[test]
fn resize_reprojects_points_and_brush_extent() {
    let clock = ManualClock::new();
    let config = PlotConfig::new(Viewport::new(550, 440), -5.0, 5.0);
    let mut plot = ScatterPlotController::new(
        NullRenderer::default(),
        RecordingViewer::default(),
        RecordingDetailPanel::default(),
        config,
    )
    .expect("plot init")
    .with_time_source(clock.clone());
    plot.set_data(dataset()).expect("set data");
    assert_eq!(plot.extent().width, 460.0);

    let plan = plot.resize(Viewport::new(1010, 440)).expect("resize");
    assert_eq!(plan.updated.len(), 3);
    assert_eq!(plot.extent().width, 920.0);
    assert_eq!(plot.map_x_to_pixel(0.0), 460.0);

    clock.advance_ms(750);
    let view = plot.view("v1").expect("view");
    assert_eq!(view.cx, 460.0);

    assert!(plot.pointer_down(900.0, 10.0));
    assert!(plot.resize(Viewport::new(10, 10)).is_err());
    assert_eq!(plot.extent().width, 920.0);
}

#[test]
fn time_source_drives_view_sampling() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");

    let start = h.plot.view("v1").expect("view");
    assert_eq!(start.radius, 0.0);
    assert!(h.plot.is_animating());

    h.clock.advance_ms(750);
    let end = h.plot.view("v1").expect("view");
    assert_eq!(end.radius, 4.0);
    assert!(!h.plot.is_animating());
}

#[test]
fn repeated_id_is_selected_once_from_its_drawn_row() {
    let mut h = harness();
    h.plot
        .set_data(vec![
            Point::new("v1", 12, 0.0, 10.5, RED),
            Point::new("v1", 99, 0.1, 10.5, BLUE),
            Point::new("v2", 40, 4.0, 10.5, BLUE),
        ])
        .expect("set data");
    assert_eq!(h.plot.point_renderer().len(), 2);

    let event = drag(&mut h.plot, (0.0, 0.0), (460.0, 400.0));
    assert_eq!(event.selection.ids(), ["v1".to_owned(), "v2".to_owned()]);
    assert_eq!(*h.detail.requests.borrow(), vec!["/variant?ids=v1,v2".to_owned()]);

    let residues: Vec<i32> = h.viewer.highlights.borrow()[0]
        .data
        .iter()
        .map(|entry| entry.residue_number)
        .collect();
    assert_eq!(residues, vec![12, 40]);

    let selected: Vec<i32> = h
        .plot
        .selected_points()
        .into_iter()
        .map(|point| point.residue_number)
        .collect();
    assert_eq!(selected, vec![12, 40]);
}

#[test]
fn repeated_id_outside_brush_is_not_selected_through_later_row() {
    let mut h = harness();
    h.plot
        .set_data(vec![
            Point::new("v1", 12, -4.0, 10.5, RED),
            Point::new("v1", 12, 0.0, 10.5, RED),
        ])
        .expect("set data");

    let event = drag(&mut h.plot, (200.0, 0.0), (260.0, 400.0));
    assert!(event.selection.is_empty());
}

#[test]
fn out_of_range_point_color_is_rejected_and_keeps_current_data() {
    let mut h = harness();
    h.plot.set_data(dataset()).expect("set data");

    let result = h.plot.set_data(vec![
        Point::new("bad", 1, 0.0, 1.0, Color::rgb(2.0, 0.0, 0.0)),
        Point::new("ok", 2, 1.0, 1.0, Color::WHITE),
    ]);
    assert!(matches!(result, Err(PlotError::InvalidData(_))));
    assert_eq!(h.plot.dataset().len(), 3);
    assert_eq!(h.plot.point_renderer().len(), 3);
    assert_eq!(h.plot.renderer().enter_count, 3);

    h.clock.advance_ms(1_000);
    assert!(!h.plot.tick().expect("frame renders"));
    assert_eq!(h.plot.renderer().frames_rendered, 1);
    assert_eq!(h.plot.renderer().last_circle_count, 3);
}
