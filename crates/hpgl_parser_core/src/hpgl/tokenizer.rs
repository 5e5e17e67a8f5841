//! Splits raw command text into an ordered sequence of command tokens

use crate::DecodeError;

/// Minimum number of delimited tokens for a usable plotter program; fewer
/// cannot contain even an initialize/select/draw sequence.
const MIN_TOKEN_COUNT: usize = 3;

/// One command token: a two-character mnemonic plus its raw parameter text.
/// Tokens borrow from the input and live for a single decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpglToken<'a> {
    /// Two-character command mnemonic (`IN`, `SP`, `PU`, `PD`, ...).
    pub opcode: &'a str,
    /// Raw parameter text following the mnemonic, possibly empty.
    pub params: &'a str,
    /// Position of the command in the delimited stream, for diagnostics.
    pub index: usize,
}

/// Split the command text on `delimiter` into tokens, skipping empty and
/// whitespace-only pieces. A single trailing delimiter terminates the last
/// command rather than opening an empty one. Opcode recognition is deferred
/// to the decoder; the only validation here is the fatal minimum-count
/// check.
pub fn tokenize(input: &str, delimiter: char) -> Result<Vec<HpglToken<'_>>, DecodeError> {
    let input = input.strip_suffix(delimiter).unwrap_or(input);

    let mut piece_count = 0;
    let mut tokens = Vec::new();
    for (index, piece) in input.split(delimiter).enumerate() {
        piece_count = index + 1;
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        // A piece shorter than two characters still becomes a token; the
        // decoder reports it as unrecognized.
        let opcode_end = piece.char_indices().nth(2).map_or(piece.len(), |(i, _)| i);
        let (opcode, params) = piece.split_at(opcode_end);
        tokens.push(HpglToken { opcode, params, index });
    }

    if piece_count < MIN_TOKEN_COUNT {
        return Err(DecodeError::NoUsableInput { found: piece_count });
    }
    Ok(tokens)
}
