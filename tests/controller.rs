#![allow(clippy::unwrap_used)]

use shedmodel::{Part, ShapeDescriptor, ShapeStore, ShedController, ShedParams, WallSlot};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn form_events_drive_the_scene() {
    init_tracing();
    let mut controller = ShedController::new(ShedParams::default(), ShapeStore::new());
    assert_eq!(controller.render().unwrap(), 8);

    controller.set_width(12.0).unwrap();
    controller.set_length(8.0).unwrap();
    controller.set_height(3.0).unwrap();
    controller.set_gable_roof(true).unwrap();
    assert_eq!(controller.set_wall_with_door(4).unwrap(), 11);

    let parts: Vec<Part> = controller.sink().iter().map(|(_, s)| s.part).collect();
    assert!(parts.contains(&Part::Door(WallSlot::Four)));
    assert!(!parts.contains(&Part::Door(WallSlot::One)));
    assert!(parts.contains(&Part::Wall(WallSlot::One)));
}

#[test]
fn rejected_change_keeps_previous_shapes() {
    init_tracing();
    let mut controller = ShedController::new(ShedParams::default(), ShapeStore::new());
    controller.render().unwrap();
    let before = controller.sink().to_vec();
    assert!(controller.set_width(f64::INFINITY).is_err());
    assert_eq!(controller.sink().to_vec(), before);
}

#[test]
fn params_from_json_render_directly() {
    init_tracing();
    let params = ShedParams::from_json(
        r##"{"width": 6, "length": 9, "height": 4, "roof_style": "gable",
             "wall_with_door": 2, "wall_color": "#884422"}"##,
    )
    .unwrap();
    let mut shapes: Vec<ShapeDescriptor> = Vec::new();
    let mut controller = ShedController::new(params, &mut shapes);
    assert_eq!(controller.render().unwrap(), 11);
    drop(controller);
    assert_eq!(shapes.len(), 11);
    let jamb = shapes
        .iter()
        .find(|s| s.part == Part::LeftJamb(WallSlot::Two))
        .unwrap();
    assert_eq!(jamb.color.to_hex(), "#884422");
}
