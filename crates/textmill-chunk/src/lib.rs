//! Delimiter-based text chunking.
//!
//! Splits text into paragraph or sentence chunks using one fixed
//! delimiter per mode. The sentence mode is deliberately naive: it
//! splits on a literal period-plus-space and knows nothing about
//! abbreviations, decimal numbers, or other sentence-final
//! punctuation. Downstream consumers depend on this exact behavior,
//! so it must not be replaced with a smarter segmenter.

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChunkError {
    #[error("unsupported chunking mode: {0:?}")]
    UnsupportedMode(String),
}

/// How to split text into chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChunkMode {
    /// Split at every newline character.
    #[default]
    Paragraph,
    /// Split at every literal "period followed by one space".
    Sentence,
}

impl FromStr for ChunkMode {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paragraph" => Ok(ChunkMode::Paragraph),
            "sentence" => Ok(ChunkMode::Sentence),
            other => Err(ChunkError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Split `text` under the given mode.
///
/// The delimiter is consumed; consecutive delimiters yield empty
/// chunks (they are not collapsed); input without a delimiter comes
/// back as a single chunk.
pub fn chunk(text: &str, mode: ChunkMode) -> Vec<String> {
    let delimiter = match mode {
        ChunkMode::Paragraph => "\n",
        ChunkMode::Sentence => ". ",
    };
    text.split(delimiter).map(str::to_string).collect()
}

/// String-mode front end to [`chunk`].
///
/// `mode` must be `"paragraph"` or `"sentence"`; anything else is an
/// [`ChunkError::UnsupportedMode`] and no chunking is attempted.
pub fn chunk_text(text: &str, mode: &str) -> Result<Vec<String>, ChunkError> {
    Ok(chunk(text, mode.parse()?))
}
