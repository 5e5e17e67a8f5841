//! Geometric effects over decoded polyline paths
//!
//! Single-pass point transforms applied after decoding: a whirl distortion
//! and a segment splitter. Both operate on canvas-space coordinates.

use crate::{EffectError, PathData, PathSegment, Point};
use serde::{Deserialize, Serialize};

/// Whirl distortion parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhirlOptions {
    /// Center of the distortion; points at the center do not move.
    pub center: Point,
    /// Distortion strength. The rotation angle of a point grows linearly
    /// with its distance from the center, by `amount / 1000` radians per
    /// canvas unit.
    pub amount: f64,
    /// Rotation direction.
    pub clockwise: bool,
}

impl Default for WhirlOptions {
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            amount: 1.0,
            clockwise: true,
        }
    }
}

/// Rotate one point around the whirl center by an angle proportional to its
/// distance from that center. Distance to the center is preserved.
pub fn whirl_point(point: Point, options: &WhirlOptions) -> Point {
    let direction = if options.clockwise { 1.0 } else { -1.0 };
    let strength = options.amount / 1000.0;

    let dx = point.x - options.center.x;
    let dy = point.y - options.center.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist == 0.0 {
        return point;
    }
    let theta = dy.atan2(dx) + direction * dist * strength;
    Point::new(options.center.x + dist * theta.cos(), options.center.y + dist * theta.sin())
}

/// Apply the whirl distortion to every coordinate of a path in place,
/// move-to origins included.
pub fn whirl_path(path: &mut PathData, options: &WhirlOptions) {
    for point in path.points_mut() {
        *point = whirl_point(*point, options);
    }
}

/// Subdivide every line segment longer than `max_length` into
/// `ceil(length / max_length)` equal parts by linear interpolation.
/// Endpoints and overall geometry are preserved; segments at or below the
/// maximum pass through untouched.
pub fn split_segments(path: &PathData, max_length: f64) -> Result<PathData, EffectError> {
    if !(max_length > 0.0) || !max_length.is_finite() {
        return Err(EffectError::NonPositiveLength { value: max_length });
    }

    let mut cursor = path.start();
    let mut segments = Vec::with_capacity(path.segments().len());
    for segment in path.segments() {
        match segment {
            PathSegment::MoveTo(point) => {
                cursor = *point;
                segments.push(PathSegment::MoveTo(*point));
            }
            PathSegment::LineTo(points) => {
                let mut group = Vec::with_capacity(points.len());
                for &target in points {
                    let length = cursor.distance_to(target);
                    if length > max_length {
                        let parts = (length / max_length).ceil() as usize;
                        for step in 1..parts {
                            group.push(Point::lerp(cursor, target, step as f64 / parts as f64));
                        }
                    }
                    group.push(target);
                    cursor = target;
                }
                segments.push(PathSegment::LineTo(group));
            }
        }
    }
    Ok(PathData::from_segments(segments))
}
