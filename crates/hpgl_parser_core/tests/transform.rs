use hpgl_parser_core::{CoordinateTransform, Point, REFERENCE_RESOLUTION};

#[test]
fn test_reference_resolution_maps_dots_to_units() {
    let transform = CoordinateTransform::new(REFERENCE_RESOLUTION, REFERENCE_RESOLUTION, 200.0);

    assert_eq!(transform.to_canvas(0.0, 0.0), Point::new(0.0, 200.0));
    assert_eq!(transform.to_canvas(100.0, 50.0), Point::new(100.0, 150.0));
}

#[test]
fn test_higher_resolution_shrinks_output() {
    // 180 dots/inch is twice the reference, so device values halve.
    let transform = CoordinateTransform::new(180.0, 180.0, 200.0);

    assert_eq!(transform.to_canvas(100.0, 100.0), Point::new(50.0, 150.0));
    assert_eq!(transform.scale_x(), 2.0);
    assert_eq!(transform.scale_y(), 2.0);
}

#[test]
fn test_axes_scale_independently() {
    let transform = CoordinateTransform::new(90.0, 180.0, 200.0);

    assert_eq!(transform.to_canvas(10.0, 10.0), Point::new(10.0, 195.0));
}

#[test]
fn test_transform_is_deterministic() {
    let transform = CoordinateTransform::new(1016.0, 1016.0, 1052.36);

    let a = transform.to_canvas(1234.0, 5678.0);
    let b = transform.to_canvas(1234.0, 5678.0);
    assert_eq!(a, b);
}

#[test]
fn test_vertical_axis_flip_is_monotonic() {
    let transform = CoordinateTransform::new(90.0, 90.0, 200.0);

    // Growing device Y must strictly shrink canvas Y.
    let mut previous = transform.to_canvas(0.0, 0.0).y;
    for device_y in [1.0, 5.0, 50.0, 199.0, 1000.0] {
        let canvas_y = transform.to_canvas(0.0, device_y).y;
        assert!(canvas_y < previous, "canvas y {canvas_y} not below {previous} for device y {device_y}");
        previous = canvas_y;
    }
}
