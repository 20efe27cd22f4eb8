//! Glyph fonts
//!
//! Font types and the logic for decoding font files.
//!
//! A font file is plain text: one block of rows per character, blocks separated by a blank line,
//! in the order of [`SUPPORTED_CHARS`]. Decoding is best-effort. Anything unusual about the file
//! is reported as a [`FontWarning`] next to the decoded font rather than as an error.

mod glyph;

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::mem;
use std::path::{Path, PathBuf};

use bstr::{BString, ByteSlice as _};
use itertools::Itertools as _;
use log::debug;
use thiserror::Error;

pub use glyph::{GLYPH_HEIGHT, Glyph, SUPPORTED_CHARS};

use crate::render::{Banner, Renderer};
use crate::str_ext::StrExt as _;

/// A glyph font
///
/// A font is read-only once decoded. It covers as many of the [`SUPPORTED_CHARS`] as its source
/// defines, so lookups for the remaining characters miss.
#[derive(Clone, Debug, Default)]
pub struct Font {
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    /// Reads and decodes a font file.
    ///
    /// This is a convenience wrapper around [`Font::load_with_warnings`], ignoring the warnings.
    ///
    /// # Errors
    /// Returns [`FontError::Unavailable`] if the file cannot be opened or read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        Self::load_with_warnings(path).map(|(font, _)| font)
    }

    /// Reads and decodes a font file, also returning any non-fatal issues found while decoding.
    ///
    /// # Errors
    /// Returns [`FontError::Unavailable`] if the file cannot be opened or read.
    pub fn load_with_warnings(
        path: impl AsRef<Path>,
    ) -> Result<(Self, Vec<FontWarning>), FontError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| FontError::Unavailable {
            path: path.to_owned(),
            source,
        })?;
        let (font, warnings) = Self::from_bytes_with_warnings(bytes);
        debug!(
            "loaded {} glyphs from {} ({} warnings)",
            font.len(),
            path.display(),
            warnings.len()
        );
        Ok((font, warnings))
    }

    /// Decodes a font from any reader, consuming it to the end.
    ///
    /// # Errors
    /// Returns [`FontError::Read`] if the reader fails.
    pub fn from_reader(mut reader: impl Read) -> Result<(Self, Vec<FontWarning>), FontError> {
        let mut bytes = Vec::new();
        _ = reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes_with_warnings(bytes))
    }

    /// Decodes the contents of a font file, ignoring warnings.
    #[must_use]
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::from_bytes_with_warnings(bytes).0
    }

    /// Decodes the contents of a font file and also returns any non-fatal issues found while
    /// decoding.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. A line is blank only if it is empty: a row made
    /// of spaces belongs to a glyph (the space glyph consists of nothing else).
    #[must_use]
    pub fn from_bytes_with_warnings(bytes: impl AsRef<[u8]>) -> (Self, Vec<FontWarning>) {
        let source: BString = bytes
            .as_ref()
            .replace("\r\n", "\n")
            .into_iter()
            .map(|c| if c == b'\r' { b'\n' } else { c })
            .collect();
        let mut decoder = Decoder::default();
        for line in source.lines() {
            decoder.push_line(line);
        }
        decoder.finish()
    }

    /// Renders a string with default settings.
    #[must_use]
    pub fn render(&self, text: &str) -> Banner {
        Renderer::new(self).render(text)
    }

    /// The glyph for `char`, if the font defines one.
    #[must_use]
    pub fn get(&self, char: char) -> Option<&Glyph> {
        self.glyphs.get(&char)
    }

    /// Number of glyphs in the font.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if the font has no glyphs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Returns true if every one of the [`SUPPORTED_CHARS`] has a glyph.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.glyphs.len() == SUPPORTED_CHARS.len()
    }

    /// The characters with a glyph, in font file order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        SUPPORTED_CHARS
            .into_iter()
            .map(char::from)
            .filter(|c| self.glyphs.contains_key(c))
    }
}

/// Collects blocks of rows into glyphs, one line at a time.
#[derive(Default)]
struct Decoder {
    glyphs: HashMap<char, Glyph>,
    pending: Vec<String>,
    dropped_rows: usize,
    non_utf8_row: Option<usize>,
    extra_blocks: usize,
    warnings: Vec<FontWarning>,
}

impl Decoder {
    fn push_line(&mut self, line: &[u8]) {
        if line.is_empty() {
            self.commit();
        } else if self.pending.len() < GLYPH_HEIGHT {
            let row = if let Ok(row) = line.to_str() {
                row.to_owned()
            } else {
                _ = self.non_utf8_row.get_or_insert(self.pending.len());
                line.to_str_lossy().into_owned()
            };
            self.pending.push(row);
        } else {
            self.dropped_rows += 1;
        }
    }

    fn commit(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let rows = mem::take(&mut self.pending);
        let dropped_rows = mem::take(&mut self.dropped_rows);
        let non_utf8_row = self.non_utf8_row.take();
        // every committed block fills the next free slot
        let Some(&code) = SUPPORTED_CHARS.get(self.glyphs.len()) else {
            self.extra_blocks += 1;
            return;
        };
        let char = char::from(code);
        if dropped_rows > 0 {
            self.warnings.push(FontWarning::TallGlyph {
                char,
                rows: GLYPH_HEIGHT + dropped_rows,
            });
        } else if rows.len() < GLYPH_HEIGHT {
            self.warnings.push(FontWarning::ShortGlyph {
                char,
                rows: rows.len(),
            });
        }
        if let Some(row) = non_utf8_row {
            self.warnings.push(FontWarning::NonUtf8 { char, row });
        }
        if rows.iter().map(|row| row.char_width()).unique().exactly_one().is_err() {
            self.warnings.push(FontWarning::InconsistentWidth(char));
        }
        drop(self.glyphs.insert(char, Glyph::new(rows)));
    }

    fn finish(mut self) -> (Font, Vec<FontWarning>) {
        self.commit();
        if self.extra_blocks > 0 {
            self.warnings.push(FontWarning::ExtraBlocks(self.extra_blocks));
        }
        if self.glyphs.len() < SUPPORTED_CHARS.len() {
            self.warnings.push(FontWarning::MissingGlyphs(self.glyphs.len()));
        }
        let font = Font {
            glyphs: self.glyphs,
        };
        (font, self.warnings)
    }
}

/// An error in loading a font
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file is missing or unreadable.
    #[error("failed to open font file {}: {source}", .path.display())]
    Unavailable {
        /// Path of the font file
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
    /// A reader failed while the font was being read.
    #[error("failed to read font data: {0}")]
    Read(#[from] io::Error),
}

/// A non-fatal issue with a font found while decoding
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FontWarning {
    /// A block had more than [`GLYPH_HEIGHT`] rows; the rows after that were dropped.
    #[error("glyph for {char:?} has {rows} rows, only the first {} are kept", GLYPH_HEIGHT)]
    TallGlyph {
        /// The character the block was assigned to
        char: char,
        /// Number of rows in the block
        rows: usize,
    },
    /// A block had fewer than [`GLYPH_HEIGHT`] rows. It is kept as it is.
    #[error("glyph for {char:?} has only {rows} rows, expected {}", GLYPH_HEIGHT)]
    ShortGlyph {
        /// The character the block was assigned to
        char: char,
        /// Number of rows in the block
        rows: usize,
    },
    /// The rows of a glyph differ in width, which will misalign the rows of a banner.
    #[error("glyph for {0:?} has inconsistent width")]
    InconsistentWidth(char),
    /// A row of a glyph is not valid UTF-8 and was decoded lossily.
    #[error("row {row} of the glyph for {char:?} is not valid UTF-8")]
    NonUtf8 {
        /// The character the block was assigned to
        char: char,
        /// Index of the first offending row
        row: usize,
    },
    /// The font defines fewer glyphs than there are [`SUPPORTED_CHARS`].
    #[error("not enough glyphs, found {0}, expected 95")]
    MissingGlyphs(usize),
    /// Blocks after the last supported character were ignored.
    #[error("ignored {0} blocks after the last glyph")]
    ExtraBlocks(usize),
}
