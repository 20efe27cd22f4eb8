use std::fmt::{self, Display};

use itertools::Itertools as _;

/// Escape sequence that ends a colored fragment.
pub const RESET: &str = "\x1b[0m";

/// A terminal color for highlighting
///
/// Each color is a fixed SGR escape sequence; see [`Color::code`]. Names that are not recognized
/// by [`Color::from_name`] fall back to [`Color::White`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// `ESC[31m`
    Red,
    /// `ESC[38;5;208m` (256-color palette)
    Orange,
    /// `ESC[33m`
    Yellow,
    /// `ESC[32m`
    Green,
    /// `ESC[34m`
    Blue,
    /// `ESC[38;5;54m` (256-color palette)
    Indigo,
    /// `ESC[35m`
    Violet,
    /// `ESC[35m`, same as [`Color::Violet`]
    Purple,
    /// `ESC[36m`
    Cyan,
    /// `ESC[37m`. This is the default.
    #[default]
    White,
}

impl Color {
    /// An array containing all the variants
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Cyan,
        Self::White,
    ];

    /// The escape sequence that starts a fragment in this color.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Orange => "\x1b[38;5;208m",
            Self::Yellow => "\x1b[33m",
            Self::Green => "\x1b[32m",
            Self::Blue => "\x1b[34m",
            Self::Indigo => "\x1b[38;5;54m",
            Self::Violet | Self::Purple => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }

    /// The lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Match a name to a color, ignoring ASCII case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// Like [`Color::parse`], but unrecognized names give [`Color::White`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub(crate) fn paint(self, fragment: &str, buffer: &mut String) {
        buffer.push_str(self.code());
        buffer.push_str(fragment);
        buffer.push_str(RESET);
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marks the characters of `segment` covered by an occurrence of `substring`.
///
/// Matching ignores ASCII case and occurrences may overlap: after a match at character index
/// `i`, the search resumes at `i + 1`. The mask is indexed by character, not byte. An empty
/// `substring` marks every character.
#[must_use]
pub fn highlight_mask(segment: &str, substring: &str) -> Vec<bool> {
    let haystack: Vec<char> = segment.chars().map(|c| c.to_ascii_lowercase()).collect();
    let needle: Vec<char> = substring.chars().map(|c| c.to_ascii_lowercase()).collect();
    if needle.is_empty() {
        return vec![true; haystack.len()];
    }
    let mut mask = vec![false; haystack.len()];
    for start in haystack
        .windows(needle.len())
        .positions(|window| window == needle.as_slice())
    {
        mask[start..start + needle.len()].fill(true);
    }
    mask
}
