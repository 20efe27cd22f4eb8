use crate::str_ext::StrExt as _;

/// Number of rows in every glyph of a font.
pub const GLYPH_HEIGHT: usize = 8;

/// The 95 printable ASCII characters, in the order their glyphs appear in a font file.
pub const SUPPORTED_CHARS: [u8; 95] = *b" !\"#$%&'()*+,-./0123456789:;<=>?@\
                                         ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`\
                                         abcdefghijklmnopqrstuvwxyz{|}~";

/// The banner art for a single character
///
/// A glyph decoded from a well-formed font has exactly [`GLYPH_HEIGHT`] rows. Shorter blocks are
/// kept as they are; the missing rows read as empty strings through [`Glyph::row`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
    width: usize,
}

impl Glyph {
    pub(crate) fn new(rows: Vec<String>) -> Self {
        let width = rows.iter().map(|row| row.char_width()).max().unwrap_or(0);
        Self { rows, width }
    }

    /// The rows as they appear in the font file.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The row at `index`, or `""` if the glyph has fewer rows.
    #[must_use]
    pub fn row(&self, index: usize) -> &str {
        self.rows.get(index).map_or("", String::as_str)
    }

    /// Width of the widest row, in chars.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows stored for this glyph.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}
