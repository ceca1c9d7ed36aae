use std::path::Path;
use std::sync::{Arc, Mutex};

use egui::{Color32, PointerButton, pos2, vec2};
use pixelpaint::canvas::Canvas;
use pixelpaint::event::CanvasEvent;
use pixelpaint::input::InputEvent;
use pixelpaint::tool::{FillTool, ToolType};

// Helpers to drive the canvas the way a UI layer would

fn press(canvas: &mut Canvas, x: f32, y: f32) {
    canvas.handle_event(InputEvent::PointerDown {
        position: pos2(x, y),
        button: PointerButton::Primary,
        pan_modifier: false,
    });
}

fn drag(canvas: &mut Canvas, x: f32, y: f32) {
    canvas.handle_event(InputEvent::PointerMove {
        position: pos2(x, y),
        held_buttons: vec![PointerButton::Primary],
    });
}

fn release(canvas: &mut Canvas) {
    canvas.handle_event(InputEvent::PointerUp {
        button: PointerButton::Primary,
    });
}

fn assert_all_pixels(canvas: &Canvas, color: Color32) {
    for y in 0..canvas.buffer().height() as i32 {
        for x in 0..canvas.buffer().width() as i32 {
            assert_eq!(canvas.buffer().get(x, y), Some(color), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn stroke_then_undo_then_redo() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.set_tool_size(1.0);
    canvas.set_color(Color32::BLACK);

    press(&mut canvas, 2.0, 2.0);
    drag(&mut canvas, 2.0, 7.0);
    release(&mut canvas);

    assert_eq!(canvas.buffer().get(2, 4), Some(Color32::BLACK));
    assert_eq!(canvas.buffer().get(5, 5), Some(Color32::WHITE));
    let after_stroke = canvas.buffer().clone();

    canvas.undo();
    assert_all_pixels(&canvas, Color32::WHITE);

    canvas.redo();
    assert_eq!(canvas.buffer(), &after_stroke);
}

#[test]
fn fill_tool_through_the_canvas() {
    let mut canvas = Canvas::new(5, 5).unwrap();
    canvas.set_tool(ToolType::Fill(FillTool::default()));
    canvas.set_color(Color32::RED);

    press(&mut canvas, 0.0, 0.0);
    release(&mut canvas);

    assert_all_pixels(&canvas, Color32::RED);

    canvas.undo();
    assert_all_pixels(&canvas, Color32::WHITE);
}

#[test]
fn middle_button_pans_without_drawing() {
    let mut canvas = Canvas::new(10, 10).unwrap();

    canvas.handle_event(InputEvent::PointerDown {
        position: pos2(10.0, 10.0),
        button: PointerButton::Middle,
        pan_modifier: false,
    });
    canvas.handle_event(InputEvent::PointerMove {
        position: pos2(20.0, 15.0),
        held_buttons: vec![PointerButton::Middle],
    });
    canvas.handle_event(InputEvent::PointerUp {
        button: PointerButton::Middle,
    });

    assert_eq!(canvas.view().pan_offset(), vec2(10.0, 5.0));
    assert_all_pixels(&canvas, Color32::WHITE);
    assert!(!canvas.can_undo());
}

#[test]
fn pan_modifier_turns_the_primary_button_into_a_pan() {
    let mut canvas = Canvas::new(10, 10).unwrap();

    canvas.handle_event(InputEvent::PointerDown {
        position: pos2(0.0, 0.0),
        button: PointerButton::Primary,
        pan_modifier: true,
    });
    canvas.handle_event(InputEvent::PointerMove {
        position: pos2(3.0, 4.0),
        held_buttons: vec![PointerButton::Primary],
    });
    release(&mut canvas);

    assert_eq!(canvas.view().pan_offset(), vec2(3.0, 4.0));
    assert_all_pixels(&canvas, Color32::WHITE);
    assert!(!canvas.can_undo());
}

#[test]
fn tool_activation_is_rejected_while_panning() {
    let mut canvas = Canvas::new(10, 10).unwrap();

    canvas.handle_event(InputEvent::PointerDown {
        position: pos2(5.0, 5.0),
        button: PointerButton::Middle,
        pan_modifier: false,
    });
    // Primary press mid-pan must neither paint nor record history
    press(&mut canvas, 5.0, 5.0);

    assert_all_pixels(&canvas, Color32::WHITE);
    assert!(!canvas.can_undo());
}

#[test]
fn pan_is_rejected_while_drawing() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.set_tool_size(1.0);

    press(&mut canvas, 1.0, 1.0);
    canvas.handle_event(InputEvent::PointerDown {
        position: pos2(5.0, 5.0),
        button: PointerButton::Middle,
        pan_modifier: false,
    });
    drag(&mut canvas, 1.0, 3.0);
    release(&mut canvas);

    // The stroke continued; the view never moved
    assert_eq!(canvas.buffer().get(1, 2), Some(Color32::BLACK));
    assert_eq!(canvas.view().pan_offset(), vec2(0.0, 0.0));
}

#[test]
fn wheel_zoom_maps_pointer_positions_through_the_view() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.set_tool_size(1.0);

    // One notch in at the origin: zoom becomes 1.25, pan stays zero
    canvas.handle_event(InputEvent::Wheel {
        position: pos2(0.0, 0.0),
        delta: 1.0,
    });
    assert_eq!(canvas.view().zoom(), 1.25);

    // Screen (5, 5) now lands on image pixel (4, 4)
    press(&mut canvas, 5.0, 5.0);
    release(&mut canvas);
    assert_eq!(canvas.buffer().get(4, 4), Some(Color32::BLACK));
    assert_eq!(canvas.buffer().get(5, 5), Some(Color32::WHITE));
}

#[test]
fn resize_records_history_and_keeps_content() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.set_tool_size(1.0);
    press(&mut canvas, 1.0, 1.0);
    release(&mut canvas);

    canvas.resize(6, 6).unwrap();
    assert_eq!(canvas.buffer().width(), 6);
    assert_eq!(canvas.buffer().get(1, 1), Some(Color32::BLACK));
    assert_eq!(canvas.buffer().get(5, 5), Some(Color32::WHITE));

    // Undo restores the 4x4 image
    canvas.undo();
    assert_eq!(canvas.buffer().width(), 4);
    assert_eq!(canvas.buffer().get(1, 1), Some(Color32::BLACK));
}

#[test]
fn resize_rejects_zero_dimensions_without_touching_state() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    let before = canvas.buffer().clone();

    assert!(canvas.resize(0, 6).is_err());
    assert_eq!(canvas.buffer(), &before);
    assert!(!canvas.can_undo());
}

#[test]
fn new_image_clears_history_and_resets_the_view() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    press(&mut canvas, 1.0, 1.0);
    release(&mut canvas);
    canvas.handle_event(InputEvent::Wheel {
        position: pos2(2.0, 2.0),
        delta: 1.0,
    });
    assert!(canvas.can_undo());

    canvas.new_image(8, 8, Color32::WHITE).unwrap();
    assert_eq!(canvas.buffer().width(), 8);
    assert!(!canvas.can_undo());
    assert!(!canvas.can_redo());
    assert_eq!(canvas.view().zoom(), 1.0);
    assert!(canvas.file_path().is_none());
    assert_all_pixels(&canvas, Color32::WHITE);
}

#[test]
fn history_events_fire_only_when_availability_flips() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    let events: Arc<Mutex<Vec<CanvasEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    canvas.subscribe(Box::new(move |event: &CanvasEvent| {
        if matches!(event, CanvasEvent::HistoryChanged { .. }) {
            sink.lock().unwrap().push(event.clone());
        }
    }));

    let history_events = || events.lock().unwrap().clone();

    // First stroke: undo becomes available
    press(&mut canvas, 1.0, 1.0);
    release(&mut canvas);
    assert_eq!(
        history_events(),
        vec![CanvasEvent::HistoryChanged {
            can_undo: true,
            can_redo: false
        }]
    );

    // Second stroke: nothing flips, no event
    press(&mut canvas, 2.0, 2.0);
    release(&mut canvas);
    assert_eq!(history_events().len(), 1);

    // Undo: redo becomes available
    canvas.undo();
    assert_eq!(
        history_events().last(),
        Some(&CanvasEvent::HistoryChanged {
            can_undo: true,
            can_redo: true
        })
    );

    // A new stroke invalidates redo
    press(&mut canvas, 3.0, 3.0);
    release(&mut canvas);
    assert_eq!(
        history_events().last(),
        Some(&CanvasEvent::HistoryChanged {
            can_undo: true,
            can_redo: false
        })
    );
}

#[test]
fn changed_events_request_repaints_during_a_stroke() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    let count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&count);
    canvas.subscribe(Box::new(move |event: &CanvasEvent| {
        if matches!(event, CanvasEvent::Changed) {
            *sink.lock().unwrap() += 1;
        }
    }));

    press(&mut canvas, 1.0, 1.0);
    drag(&mut canvas, 2.0, 2.0);
    drag(&mut canvas, 3.0, 3.0);
    release(&mut canvas);

    assert_eq!(*count.lock().unwrap(), 3);
}

#[test]
fn load_failure_leaves_the_canvas_unchanged() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.set_tool_size(1.0);
    press(&mut canvas, 1.0, 1.0);
    release(&mut canvas);
    let before = canvas.buffer().clone();

    let result = canvas.load_image(Path::new("/nonexistent/missing.png"));
    assert!(result.is_err());
    assert_eq!(canvas.buffer(), &before);
    assert!(canvas.can_undo());
    assert!(canvas.file_path().is_none());
}
