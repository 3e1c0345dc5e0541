use serde_json::json;
use sliderpath::model::Point;
use sliderpath::{PathCommand, Slider};

fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

#[test]
fn empty_path_emits_nothing() {
    let s = Slider::new();
    assert!(s.emit().is_empty());
}

#[test]
fn single_segment_emits_move_then_lines() {
    let mut s = Slider::new();
    s.push_point(pt(0.0, 0.0));
    s.push_point(pt(10.0, 0.0));
    s.push_point(pt(10.0, 10.0));
    assert_eq!(
        s.emit(),
        vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 10.0)),
        ]
    );
}

fn two_segment_path(through: bool) -> Slider {
    let mut s = Slider::new();
    s.push_point(pt(0.0, 0.0));
    s.push_point(pt(10.0, 0.0));
    s.set_last_segment_through(through).unwrap();
    s.set_anchor(0, 1).unwrap();
    s.push_point(pt(20.0, 0.0));
    s.push_point(pt(30.0, 0.0));
    assert_eq!(s.segment_count(), 2);
    s
}

#[test]
fn through_joint_emits_exactly_one_smooth() {
    let s = two_segment_path(true);
    let cmds = s.emit();
    assert_eq!(
        cmds,
        vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 0.0)),
            PathCommand::SmoothTo(pt(20.0, 0.0)),
            PathCommand::LineTo(pt(30.0, 0.0)),
        ]
    );
    let smooth = cmds
        .iter()
        .filter(|c| matches!(c, PathCommand::SmoothTo(_)))
        .count();
    assert_eq!(smooth, 1);
}

#[test]
fn corner_joint_emits_line() {
    let s = two_segment_path(false);
    assert!(s
        .emit()
        .iter()
        .all(|c| !matches!(c, PathCommand::SmoothTo(_))));
}

#[test]
fn trailing_through_flag_without_next_segment_has_no_effect() {
    let mut s = Slider::new();
    s.push_point(pt(0.0, 0.0));
    s.push_point(pt(10.0, 0.0));
    s.set_last_segment_through(true).unwrap();
    assert_eq!(
        s.emit(),
        vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 0.0)),
        ]
    );
}

#[test]
fn emit_is_a_pure_read() {
    let s = two_segment_path(true);
    assert_eq!(s.emit(), s.emit());
}

#[test]
fn emit_tracks_mutations() {
    let mut s = two_segment_path(true);
    let before = s.emit();
    s.move_point(1, 0, pt(20.0, 40.0)).unwrap();
    let after = s.emit();
    assert_ne!(before, after);
    assert_eq!(after[2], PathCommand::SmoothTo(pt(20.0, 40.0)));
}

#[test]
fn emit_json_is_tagged_command_objects() {
    let mut s = Slider::new();
    s.push_point(pt(0.0, 0.0));
    s.push_point(pt(10.0, 0.0));
    assert_eq!(
        s.emit_json(),
        json!([
            { "move_to": { "x": 0.0, "y": 0.0 } },
            { "line_to": { "x": 10.0, "y": 0.0 } },
        ])
    );
}
