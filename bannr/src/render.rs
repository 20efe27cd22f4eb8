//! Renderer and rendering settings
mod align;
mod color;

use std::fmt::{self, Display};
use std::iter::repeat_n;

use log::{debug, trace};
use thiserror::Error;

use crate::font::{Font, GLYPH_HEIGHT, Glyph};
use crate::str_ext::StrExt as _;

pub use align::{Alignment, align_lines, justify_gaps};
pub use color::{Color, RESET, highlight_mask};

/// The default target width for [`Alignment::Right`], [`Alignment::Center`] and
/// [`Alignment::Justify`].
pub const DEFAULT_WIDTH: usize = 200;

/// The two-character sequence `\n` that separates lines of input. A real newline character is
/// not a separator.
pub const LINE_SEPARATOR: &str = "\\n";

/// The main type for rendering
///
/// Use [`render()`](Renderer::render) to process strings.
///
/// The other methods are meant to be used in a builder pattern:
/// ```
/// # use bannr::font::Font;
/// # use bannr::render::{Alignment, Color, RESET, Renderer};
/// // only the space glyph, two wide
/// let font = Font::from_bytes("\n<>\n<>\n<>\n<>\n<>\n<>\n<>\n<>\n");
/// let banner = Renderer::new(&font)
///     .alignment(Alignment::Justify)
///     .width(10)
///     .color(Color::Green)
///     .render("   ");
/// let green = Color::Green.code();
/// assert_eq!(
///     banner.lines()[0],
///     format!("{green}<>{RESET}  {green}<>{RESET}  {green}<>{RESET}")
/// );
/// assert_eq!(banner.width(), 10);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Renderer<'font> {
    font: &'font Font,
    config: RenderConfig,
}

impl<'font> Renderer<'font> {
    /// Creates a new renderer with the default [`RenderConfig`].
    pub fn new(font: &'font Font) -> Self {
        Self::with_config(font, RenderConfig::default())
    }

    /// Creates a new renderer with the given settings.
    pub const fn with_config(font: &'font Font, config: RenderConfig) -> Self {
        Self { font, config }
    }

    /// Sets the alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Sets the target width, used by every alignment except [`Alignment::Left`].
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Colors every character.
    pub fn color(mut self, color: Color) -> Self {
        self.config.highlight = Some(Highlight {
            color,
            substring: String::new(),
        });
        self
    }

    /// Colors the characters covered by `substring`; see [`highlight_mask`].
    pub fn highlight(mut self, color: Color, substring: impl Into<String>) -> Self {
        self.config.highlight = Some(Highlight {
            color,
            substring: substring.into(),
        });
        self
    }

    /// Sets the policy for characters the font has no glyph for.
    pub fn missing_glyph(mut self, policy: MissingGlyph) -> Self {
        self.config.missing_glyph = policy;
        self
    }

    /// The current settings.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the given string.
    ///
    /// The input is split into segments at each literal `\n` ([`LINE_SEPARATOR`]). Every
    /// non-empty segment becomes [`GLYPH_HEIGHT`] lines and every empty segment a single empty
    /// line. A lone separator gives a single empty line. The empty string gives an empty
    /// banner.
    #[must_use]
    pub fn render(&self, text: &str) -> Banner {
        if text.is_empty() {
            return Banner::default();
        }
        let segments = Self::segments(text);
        let mut lines = Vec::new();
        for segment in &segments {
            if segment.is_empty() {
                lines.push(String::new());
            } else {
                lines.extend(self.render_segment(segment));
            }
        }
        let lines = align_lines(lines, self.config.alignment, self.config.width);
        debug!(
            "rendered {} segments into {} lines",
            segments.len(),
            lines.len()
        );
        Banner { lines }
    }

    fn segments(text: &str) -> Vec<&str> {
        if text == LINE_SEPARATOR {
            return vec![""];
        }
        text.split(LINE_SEPARATOR).collect()
    }

    fn render_segment(&self, segment: &str) -> Vec<String> {
        let glyphs: Vec<(usize, &Glyph)> = segment
            .chars()
            .enumerate()
            .filter_map(|(index, c)| self.glyph(c).map(|glyph| (index, glyph)))
            .collect();
        let highlight = self
            .config
            .highlight
            .as_ref()
            .map(|highlight| (highlight.color, highlight.mask(segment)));
        let gaps = self.justify_padding(&glyphs);
        trace!(
            "segment {segment:?}: {} glyphs, gaps {gaps:?}",
            glyphs.len()
        );
        (0..GLYPH_HEIGHT)
            .map(|row| {
                let mut line = String::new();
                for (n, &(index, glyph)) in glyphs.iter().enumerate() {
                    if let Some(&padding) = n.checked_sub(1).and_then(|gap| gaps.get(gap)) {
                        line.extend(repeat_n(' ', padding));
                    }
                    let fragment = glyph.row(row);
                    match &highlight {
                        Some((color, mask)) if mask[index] => color.paint(fragment, &mut line),
                        _ => line.push_str(fragment),
                    }
                }
                line
            })
            .collect()
    }

    fn glyph(&self, c: char) -> Option<&'font Glyph> {
        self.font.get(c).or_else(|| match self.config.missing_glyph {
            MissingGlyph::Skip => None,
            MissingGlyph::Space => self.font.get(' '),
        })
    }

    /// Blanks to insert after each glyph but the last, empty unless justifying. The natural
    /// width assumes every glyph is as wide as the first row of the first one.
    fn justify_padding(&self, glyphs: &[(usize, &Glyph)]) -> Vec<usize> {
        if self.config.alignment != Alignment::Justify || glyphs.len() <= 1 {
            return Vec::new();
        }
        let glyph_width = glyphs[0].1.row(0).char_width();
        let natural_width = glyph_width * glyphs.len();
        match self.config.width.checked_sub(natural_width) {
            Some(extra) if extra > 0 => justify_gaps(extra, glyphs.len() - 1),
            _ => Vec::new(),
        }
    }
}

/// Settings for a [`Renderer`]
///
/// The default is left aligned, [`DEFAULT_WIDTH`] wide, uncolored, skipping missing glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Line alignment
    pub alignment: Alignment,
    /// Target width, ignored by [`Alignment::Left`]
    pub width: usize,
    /// Color highlighting, if any
    pub highlight: Option<Highlight>,
    /// What to do with characters the font has no glyph for
    pub missing_glyph: MissingGlyph,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            width: DEFAULT_WIDTH,
            highlight: None,
            missing_glyph: MissingGlyph::default(),
        }
    }
}

/// A color and the substring to apply it to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    /// The color of highlighted characters
    pub color: Color,
    /// The substring to highlight, matched ignoring ASCII case. Empty means every character.
    pub substring: String,
}

impl Highlight {
    fn mask(&self, segment: &str) -> Vec<bool> {
        highlight_mask(segment, &self.substring)
    }
}

/// Policy for characters with no glyph in the font
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingGlyph {
    /// Leave the character out, so it takes no width at all. This is the default.
    #[default]
    Skip,
    /// Use the glyph for the space character instead, if the font has one.
    Space,
}

/// Invalid rendering settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The name of an alignment mode is not recognized.
    #[error(r#""{0}" is not an alignment, expecting left, right, center or justify"#)]
    UnknownAlignment(String),
}

/// The result of rendering
///
/// Converting a banner to a string with [`Display`] puts a newline after every line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    lines: Vec<String>,
}

impl Banner {
    /// The rendered lines, which may contain color escapes.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the banner, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns true if there are no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The width of the widest line, not counting color escapes.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.visible_width())
            .max()
            .unwrap_or(0)
    }
}

impl Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
