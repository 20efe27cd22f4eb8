use std::fmt::{self, Display};
use std::iter::repeat_n;
use std::str::FromStr;

use super::ConfigError;
use crate::str_ext::StrExt as _;

/// The choice of alignment for rendered lines
///
/// [`Alignment::Justify`] acts while glyphs are composed: it spreads blanks between the glyphs of
/// each line so that the line reaches the target width. The other modes only pad whole lines
/// afterwards; see [`align_lines`].
///
/// The default is [`Alignment::Left`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Lines are left as they are. This is the default.
    #[default]
    Left,
    /// Lines are padded with blanks on the left.
    Right,
    /// Lines are padded on both sides. If the padding is odd, the extra blank goes on the right.
    Center,
    /// Blanks are distributed between glyphs; see [`justify_gaps`].
    Justify,
}

impl Alignment {
    /// An array containing all the variants
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Center, Self::Justify];

    /// The lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justify => "justify",
        }
    }

    fn pad(self, line: String, to_width: usize) -> String {
        if line.is_empty() {
            return line;
        }
        let Some(padding) = to_width.checked_sub(line.visible_width()) else {
            return line;
        };
        match self {
            Self::Left | Self::Justify => line,
            Self::Right => repeat_n(' ', padding).chain(line.chars()).collect(),
            Self::Center => {
                let start = padding / 2;
                repeat_n(' ', start)
                    .chain(line.chars())
                    .chain(repeat_n(' ', padding - start))
                    .collect()
            }
        }
    }
}

impl FromStr for Alignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alignment| alignment.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownAlignment(s.to_owned()))
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pads rendered lines for presentation.
///
/// The lines are padded to `width` or to the widest line, whichever is larger. Widths do not
/// count color escapes. Empty lines (separators between blocks) stay empty, and
/// [`Alignment::Left`] and [`Alignment::Justify`] return the lines unchanged.
///
/// Every padded line ends up exactly as wide as the target, so applying the same alignment again
/// changes nothing.
#[must_use]
pub fn align_lines(lines: Vec<String>, alignment: Alignment, width: usize) -> Vec<String> {
    if matches!(alignment, Alignment::Left | Alignment::Justify) {
        return lines;
    }
    let target = lines
        .iter()
        .map(|line| line.visible_width())
        .max()
        .unwrap_or(0)
        .max(width);
    lines
        .into_iter()
        .map(|line| alignment.pad(line, target))
        .collect()
}

/// Number of blanks to insert in each of `gaps` gaps so that they add up to `extra`.
///
/// Every gap gets `extra / gaps` blanks and the first `extra % gaps` gaps get one more.
#[must_use]
pub fn justify_gaps(extra: usize, gaps: usize) -> Vec<usize> {
    if gaps == 0 {
        return Vec::new();
    }
    let base = extra / gaps;
    let remainder = extra % gaps;
    (0..gaps)
        .map(|gap| base + usize::from(gap < remainder))
        .collect()
}
