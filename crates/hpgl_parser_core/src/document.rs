//! In-memory plot document: layers, finished paths and SVG serialization

use crate::{LayerHandle, PathData, PathStyle, PlotSink};
use std::fmt::Write;

/// A finished path attached to a layer. Serialization to path-data text
/// happens when the document is rendered, not when the path is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPath {
    pub data: PathData,
    pub style: PathStyle,
}

/// One named drawing layer. The same id may appear on several layer
/// instances when a pen is re-selected mid-stream.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayer {
    pub id: String,
    pub label: String,
    pub paths: Vec<PlotPath>,
}

/// Concrete [`PlotSink`]: an ordered list of layers on a fixed-size canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotDocument {
    width: f64,
    height: f64,
    layers: Vec<PlotLayer>,
}

impl PlotDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn layers(&self) -> &[PlotLayer] {
        &self.layers
    }

    pub fn path_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.paths.len()).sum()
    }

    /// Render the document as SVG text: one group per layer, one path
    /// element per finished path.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:inkscape=\"http://www.inkscape.org/namespaces/inkscape\" xmlns:sodipodi=\"http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd\" width=\"{}\" height=\"{}\">",
            self.width, self.height
        );
        for layer in &self.layers {
            let _ = writeln!(svg, "  <g inkscape:groupmode=\"layer\" inkscape:label=\"{}\">", escape_xml(&layer.label));
            for path in &layer.paths {
                let _ = writeln!(svg, "    <path d=\"{}\" style=\"{}\"/>", path.data, path.style.css());
            }
            let _ = writeln!(svg, "  </g>");
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl PlotSink for PlotDocument {
    fn create_layer(&mut self, id: &str, label: &str) -> LayerHandle {
        // Every call appends a fresh layer; re-selecting a pen yields a new
        // group and orphans the old one.
        self.layers.push(PlotLayer {
            id: id.to_string(),
            label: label.to_string(),
            paths: Vec::new(),
        });
        LayerHandle::new(self.layers.len() - 1)
    }

    fn append_path(&mut self, layer: LayerHandle, path: &PathData, style: PathStyle) {
        match self.layers.get_mut(layer.index()) {
            Some(target) => target.paths.push(PlotPath {
                data: path.clone(),
                style,
            }),
            None => log::error!("append_path: layer handle {} out of range ({} layers)", layer.index(), self.layers.len()),
        }
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
