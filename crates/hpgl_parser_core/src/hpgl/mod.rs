//! HP-GL command stream decoder
//!
//! HP-GL is the pen plotter control language: two-letter mnemonics followed
//! by comma-separated numeric parameters, commands separated by `;`. The
//! decoder interprets initialize, pen-select, pen-up and pen-down, turning a
//! command stream into layered polyline paths delivered to a [`PlotSink`].
//! All other mnemonics are reported as warnings, not executed.

mod tokenizer;
pub use tokenizer::{HpglToken, tokenize};

use crate::{CoordinateTransform, DecodeError, DecodeWarning, LayerHandle, PathData, PathStyle, PlotSink, Point};
use serde::{Deserialize, Serialize};

/// Reserved layer id for pen-up travel visualization.
pub const MOVEMENTS_LAYER_ID: &str = "0";
/// Label of the travel layer.
pub const MOVEMENTS_LAYER_LABEL: &str = "Movements";

/// Decoder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderOptions {
    /// Device resolution along X in plotter dots per inch. Must be positive.
    pub resolution_x: f64,
    /// Device resolution along Y in plotter dots per inch. Must be positive.
    pub resolution_y: f64,
    /// Emit pen-up travel moves onto a separate reserved layer.
    pub show_movements: bool,
    /// Output canvas width in canvas units.
    pub canvas_width: f64,
    /// Output canvas height in canvas units. The device origin sits at the
    /// bottom-left, so the pen starts at canvas (0, height).
    pub canvas_height: f64,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            // 1016 dots/inch is the classic HP plotter addressing resolution.
            resolution_x: 1016.0,
            resolution_y: 1016.0,
            show_movements: false,
            // A4 at the 90 dpi canvas baseline.
            canvas_width: 744.09,
            canvas_height: 1052.36,
        }
    }
}

/// Pen state owned by one decode pass: the active layer, the last recorded
/// pen position in canvas space and the path under construction.
struct PenState {
    layer: Option<LayerHandle>,
    position: Point,
    path: PathData,
}

impl PenState {
    fn new(position: Point) -> Self {
        Self {
            layer: None,
            position,
            path: PathData::new(position),
        }
    }

    /// Flush the accumulated path to the active layer if it holds at least
    /// one drawn segment, then restart the accumulator at the current pen
    /// position. Ink drawn before any pen-select lands on a default pen
    /// layer instead of being dropped.
    fn flush(&mut self, sink: &mut dyn PlotSink) {
        if !self.path.has_lines() {
            return;
        }
        let layer = match self.layer {
            Some(layer) => layer,
            None => {
                let layer = sink.create_layer("0", "Drawing Pen 0");
                self.layer = Some(layer);
                layer
            }
        };
        let path = std::mem::replace(&mut self.path, PathData::new(self.position));
        sink.append_path(layer, &path, PathStyle::Drawing);
    }
}

/// The HP-GL decoder. One instance can decode any number of streams; pen and
/// layer state live only for the duration of a single [`decode`] pass.
///
/// [`decode`]: HpglDecoder::decode
pub struct HpglDecoder {
    options: DecoderOptions,
    transform: CoordinateTransform,
    delimiter: char,
}

impl HpglDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        let transform = CoordinateTransform::new(options.resolution_x, options.resolution_y, options.canvas_height);
        Self {
            options,
            transform,
            delimiter: ';',
        }
    }

    /// Override the command delimiter (`;` by default).
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Decode a full command stream into `sink`, returning the collected
    /// soft warnings. Fails fatally before any output is produced when the
    /// stream holds fewer than 3 tokens, and mid-pass on malformed numeric
    /// parameters.
    pub fn decode(&self, input: &str, sink: &mut dyn PlotSink) -> Result<Vec<DecodeWarning>, DecodeError> {
        let tokens = tokenize(input, self.delimiter)?;
        let mut warnings = Vec::new();

        let movements_layer = if self.options.show_movements {
            Some(sink.create_layer(MOVEMENTS_LAYER_ID, MOVEMENTS_LAYER_LABEL))
        } else {
            None
        };

        let mut pen = PenState::new(Point::new(0.0, self.options.canvas_height));

        for (position, token) in tokens.iter().enumerate() {
            let is_final = position + 1 == tokens.len();
            match token.opcode {
                "IN" => {}
                "SP" => {
                    let id = token.params.trim();
                    pen.layer = Some(sink.create_layer(id, &format!("Drawing Pen {id}")));
                }
                "PU" => self.pen_up(token, is_final, movements_layer, &mut pen, sink)?,
                "PD" => self.pen_down(token, &mut pen)?,
                _ => {
                    log::warn!("unrecognized plotter command {:?} at index {}", token.opcode, token.index);
                    warnings.push(DecodeWarning::UnknownCommand);
                }
            }
        }

        // A trailing pen-down episode without a closing pen-up is still
        // recorded.
        pen.flush(sink);

        log::debug!("decoded {} commands, {} warnings", tokens.len(), warnings.len());
        Ok(warnings)
    }

    /// Pen-up: flush the accumulated path, optionally record the travel move
    /// and restart the accumulator at the new pen position. A pen-up at the
    /// end of the stream is final pen retraction and never emits a travel
    /// segment; a pen-up without coordinates keeps the current position.
    fn pen_up(
        &self,
        token: &HpglToken<'_>,
        is_final: bool,
        movements_layer: Option<LayerHandle>,
        pen: &mut PenState,
        sink: &mut dyn PlotSink,
    ) -> Result<(), DecodeError> {
        pen.flush(sink);

        // Only the first coordinate pair names the new position.
        let target = self.parse_points(token)?.first().copied();

        if let (Some(layer), Some(target)) = (movements_layer, target) {
            if !is_final {
                let mut travel = PathData::new(pen.position);
                travel.add_line_group(vec![target]);
                sink.append_path(layer, &travel, PathStyle::Travel);
            }
        }

        if let Some(target) = target {
            pen.position = target;
        }
        pen.path = PathData::new(pen.position);
        Ok(())
    }

    /// Pen-down: append one line group of transformed coordinate pairs and
    /// move the pen to the last pair. An empty parameter list is a no-op.
    fn pen_down(&self, token: &HpglToken<'_>, pen: &mut PenState) -> Result<(), DecodeError> {
        let points = self.parse_points(token)?;
        if let Some(last) = points.last() {
            pen.position = *last;
            pen.path.add_line_group(points);
        }
        Ok(())
    }

    /// Parse a token's parameter text as a flat list of device coordinates
    /// and transform each (x, y) pair into canvas space.
    fn parse_points(&self, token: &HpglToken<'_>) -> Result<Vec<Point>, DecodeError> {
        let raw = token.params.trim();
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        let mut values = Vec::new();
        for piece in raw.split(',') {
            let piece = piece.trim();
            let value: f64 = piece.parse().map_err(|_| DecodeError::MalformedParameter {
                index: token.index,
                value: piece.to_string(),
                params: token.params.to_string(),
            })?;
            values.push(value);
        }
        if values.len() % 2 != 0 {
            return Err(DecodeError::UnpairedCoordinate {
                index: token.index,
                count: values.len(),
                params: token.params.to_string(),
            });
        }

        Ok(values.chunks_exact(2).map(|pair| self.transform.to_canvas(pair[0], pair[1])).collect())
    }
}
