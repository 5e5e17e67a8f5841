//! Typed path model and its serialization to path-data text
//!
//! Paths are built as typed segments and only rendered to the `M`/`L` text
//! format at the sink boundary.

use crate::Point;
use std::fmt;

/// One segment of a polyline path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Absolute move. Always the first segment of a well-formed path.
    MoveTo(Point),
    /// A group of absolute line targets sharing one `L` group in the
    /// serialized form. One group is appended per pen-down command.
    LineTo(Vec<Point>),
}

/// An ordered list of path segments, starting with a move-to origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    /// A fresh path whose only segment is a move-to `start`.
    pub fn new(start: Point) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo(start)],
        }
    }

    pub(crate) fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The move-to origin of the path.
    pub fn start(&self) -> Point {
        match self.segments.first() {
            Some(PathSegment::MoveTo(point)) => *point,
            _ => Point::default(),
        }
    }

    /// Append one line group. An empty group is dropped, a pen-down without
    /// coordinates draws nothing.
    pub fn add_line_group(&mut self, points: Vec<Point>) {
        if !points.is_empty() {
            self.segments.push(PathSegment::LineTo(points));
        }
    }

    /// True once the path contains at least one drawn segment. Paths without
    /// line data are never emitted.
    pub fn has_lines(&self) -> bool {
        self.segments.iter().any(|segment| matches!(segment, PathSegment::LineTo(points) if !points.is_empty()))
    }

    /// Total number of line targets across all groups.
    pub fn line_point_count(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                PathSegment::MoveTo(_) => 0,
                PathSegment::LineTo(points) => points.len(),
            })
            .sum()
    }

    /// Iterate over every coordinate in the path, move-to origins included.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter().flat_map(|segment| match segment {
            PathSegment::MoveTo(point) => std::slice::from_ref(point).iter(),
            PathSegment::LineTo(points) => points.iter(),
        })
    }

    pub fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.segments.iter_mut().flat_map(|segment| match segment {
            PathSegment::MoveTo(point) => std::slice::from_mut(point).iter_mut(),
            PathSegment::LineTo(points) => points.iter_mut(),
        })
    }
}

/// Serializes to the path-data text format: `M x,y` followed by
/// `L x,y[,x,y...]` groups, coordinates as fixed-point decimals.
impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::MoveTo(point) => {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "M {:.6},{:.6}", point.x, point.y)?;
                }
                PathSegment::LineTo(points) => {
                    write!(f, " L ")?;
                    for (i, point) in points.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{:.6},{:.6}", point.x, point.y)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Stroke styling for emitted paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Ink laid down while the pen is lowered.
    Drawing,
    /// Synthetic pen-up travel move.
    Travel,
}

impl PathStyle {
    pub fn stroke_color(&self) -> &'static str {
        match self {
            Self::Drawing => "000000",
            Self::Travel => "ff0000",
        }
    }

    /// The style attribute text attached to every emitted path.
    pub fn css(&self) -> String {
        format!("stroke:#{}; stroke-width:0.4; fill:none;", self.stroke_color())
    }
}
