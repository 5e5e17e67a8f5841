//! Core decoder infrastructure for plotter command streams: HP-GL tokenizer,
//! decode state machine, plot document model and path effects.

mod errors;
pub use errors::{DecodeError, DecodeWarning, EffectError};

mod transform;
pub use transform::{CoordinateTransform, REFERENCE_RESOLUTION};

mod path;
pub use path::{PathData, PathSegment, PathStyle};

mod document;
pub use document::{PlotDocument, PlotLayer, PlotPath};

mod hpgl;
pub use hpgl::{DecoderOptions, HpglDecoder, HpglToken, MOVEMENTS_LAYER_ID, MOVEMENTS_LAYER_LABEL, tokenize};

pub mod effects;

use serde::{Deserialize, Serialize};

/// A point in either device or canvas space. The decoder only ever hands out
/// canvas-space points; device coordinates exist as bare `f64` pairs until
/// they pass through [`CoordinateTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points, `t` in `0.0..=1.0`.
    pub fn lerp(a: Point, b: Point, t: f64) -> Point {
        Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
    }
}

/// Opaque handle to a layer created through a [`PlotSink`]. Handles are only
/// meaningful to the sink that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerHandle(usize);

impl LayerHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Receiver for the layers and paths produced by a decode pass. Information
/// flows one way: the decoder never reads back from the sink.
pub trait PlotSink {
    /// Create a layer and return its handle. Every invocation yields a fresh
    /// layer instance, even for an id seen before; the decoder, not the sink,
    /// decides between reuse and recreation.
    fn create_layer(&mut self, id: &str, label: &str) -> LayerHandle;

    /// Append a finished path to a previously created layer.
    fn append_path(&mut self, layer: LayerHandle, path: &PathData, style: PathStyle);
}
