//! Renders text as block-letter banners.
//!
//! ```text
//! bannr [OPTIONS] <TEXT> [BANNER]
//! ```
//!
//! `BANNER` names a font file `<BANNER>.txt` in the fonts directory. A literal `\n` in `TEXT`
//! starts a new line.

mod logging;
mod output;

use std::fmt::{self, Display};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use bannr::font::Font;
use bannr::render::{self, Color, DEFAULT_WIDTH, MissingGlyph, Renderer};
use clap::{Parser, ValueEnum};
use log::{debug, warn};

use crate::logging::LogLevelArg;
use crate::output::Destination;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);
    let font = cli.font()?;
    let banner = cli.renderer(&font).render(&cli.text);
    Destination::new(cli.output.clone()).write(&banner)
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Text to render; a literal `\n` starts a new line
    text: String,
    /// Font to use, looked up as `<BANNER>.txt` in the fonts directory
    #[arg(default_value_t)]
    banner: Banner,
    /// Font file to use instead of a named banner
    #[arg(short = 'f', long, value_name = "PATH")]
    font: Option<PathBuf>,
    /// Directory containing the named banner fonts
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    fonts_dir: PathBuf,
    /// Color for the text; unknown names give white
    #[arg(short = 'c', long)]
    color: Option<String>,
    /// Only color occurrences of this substring (ignoring case)
    #[arg(short = 's', long, requires = "color")]
    highlight: Option<String>,
    /// How to align the rendered lines
    #[arg(short = 'a', long, default_value_t)]
    align: Alignment,
    /// Target width for right, center and justify alignment
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Write the banner to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// How to render characters the font has no glyph for
    #[arg(long, default_value_t)]
    missing_glyph: MissingGlyphArg,
    /// Lowest level of log messages written to stderr
    #[arg(long, value_name = "LEVEL", default_value_t)]
    log_level: LogLevelArg,
}

impl Cli {
    fn font_path(&self) -> PathBuf {
        self.font.clone().unwrap_or_else(|| {
            self.fonts_dir
                .join(format!("{}.txt", self.banner.file_stem()))
        })
    }

    fn font(&self) -> Result<Font> {
        let path = self.font_path();
        let (font, warnings) = Font::load_with_warnings(&path)
            .with_context(|| format!("error loading font file '{}'", path.display()))?;
        for warning in warnings {
            warn!("{}: {warning}", path.display());
        }
        Ok(font)
    }

    fn renderer<'font>(&self, font: &'font Font) -> Renderer<'font> {
        let mut renderer = Renderer::new(font)
            .alignment(self.align.into())
            .width(self.width)
            .missing_glyph(self.missing_glyph.into());
        if let Some(name) = &self.color {
            let color = Color::parse(name).unwrap_or_else(|| {
                warn!("unknown color \"{name}\", using {}", Color::default());
                Color::default()
            });
            renderer = match &self.highlight {
                Some(substring) => renderer.highlight(color, substring.as_str()),
                None => renderer.color(color),
            };
        }
        debug!("render settings: {:?}", renderer.config());
        renderer
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum Banner {
    #[default]
    #[value(alias = "standard.txt")]
    Standard,
    #[value(alias = "shadow.txt")]
    Shadow,
    #[value(alias = "thinkertoy.txt")]
    Thinkertoy,
}

impl Banner {
    const fn file_stem(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Shadow => "shadow",
            Self::Thinkertoy => "thinkertoy",
        }
    }
}

impl Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

impl From<Alignment> for render::Alignment {
    fn from(value: Alignment) -> Self {
        match value {
            Alignment::Left => Self::Left,
            Alignment::Right => Self::Right,
            Alignment::Center => Self::Center,
            Alignment::Justify => Self::Justify,
        }
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::Alignment::from(*self).fmt(f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum MissingGlyphArg {
    #[default]
    Skip,
    Space,
}

impl From<MissingGlyphArg> for MissingGlyph {
    fn from(value: MissingGlyphArg) -> Self {
        match value {
            MissingGlyphArg::Skip => Self::Skip,
            MissingGlyphArg::Space => Self::Space,
        }
    }
}

impl Display for MissingGlyphArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Space => write!(f, "space"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use bannr::render::{self, Color, Highlight};
    use clap::{CommandFactory as _, Parser as _};

    use super::{Banner, Cli};

    fn write_font(dir: &Path, name: &str) {
        let block = |c: char| vec![format!("{c}{c}"); 8].join("\n");
        let source = (b' '..=b'~')
            .map(|c| block(char::from(c)))
            .collect::<Vec<_>>()
            .join("\n\n");
        fs::write(dir.join(name), source).unwrap();
    }

    #[test]
    fn command() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_option_has_help() {
        let command = Cli::command();
        for arg in command.get_arguments() {
            assert!(arg.get_help().is_some(), "no help for --{}", arg.get_id());
        }
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["bannr", "hello"]).unwrap();
        assert_eq!(cli.banner, Banner::Standard);
        assert_eq!(cli.font_path(), Path::new(".").join("standard.txt"));
        let font = bannr::font::Font::default();
        let config = cli.renderer(&font).config().clone();
        assert_eq!(config, render::RenderConfig::default());
    }

    #[test]
    fn banner_names() {
        let cli = Cli::try_parse_from(["bannr", "hi", "shadow.txt", "-d", "fonts"]).unwrap();
        assert_eq!(cli.font_path(), Path::new("fonts").join("shadow.txt"));
        assert!(Cli::try_parse_from(["bannr", "hi", "comic"]).is_err());
    }

    #[test]
    fn highlight_requires_color() {
        assert!(Cli::try_parse_from(["bannr", "-s", "kit", "kitten"]).is_err());
        let cli = Cli::try_parse_from(["bannr", "-c", "RED", "-s", "kit", "kitten"]).unwrap();
        let font = bannr::font::Font::default();
        let renderer = cli.renderer(&font);
        assert_eq!(
            renderer.config().highlight,
            Some(Highlight {
                color: Color::Red,
                substring: "kit".to_owned()
            })
        );
    }

    #[test]
    fn unknown_color_is_white() {
        let cli = Cli::try_parse_from(["bannr", "--color", "magenta", "hi"]).unwrap();
        let font = bannr::font::Font::default();
        let highlight = cli.renderer(&font).config().highlight.clone().unwrap();
        assert_eq!(highlight.color, Color::White);
        assert!(highlight.substring.is_empty());
    }

    #[test]
    fn alignment_flags() {
        assert!(Cli::try_parse_from(["bannr", "--align", "middle", "hi"]).is_err());
        let cli =
            Cli::try_parse_from(["bannr", "--align", "justify", "-w", "40", "hi"]).unwrap();
        let font = bannr::font::Font::default();
        let config = cli.renderer(&font).config().clone();
        assert_eq!(config.alignment, render::Alignment::Justify);
        assert_eq!(config.width, 40);
    }

    #[test]
    fn empty_output_path() {
        assert!(Cli::try_parse_from(["bannr", "--output=", "hi"]).is_err());
    }

    #[test]
    fn load_named_font() {
        let dir = tempfile::tempdir().unwrap();
        write_font(dir.path(), "thinkertoy.txt");
        let fonts_dir = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["bannr", "Hi", "thinkertoy", "-d", fonts_dir]).unwrap();
        let font = cli.font().unwrap();
        let banner = cli.renderer(&font).render(&cli.text);
        assert_eq!(banner.lines(), vec!["HHii"; 8]);
    }

    #[test]
    fn missing_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let fonts_dir = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["bannr", "Hi", "-d", fonts_dir]).unwrap();
        let error = cli.font().unwrap_err();
        assert!(error.to_string().contains("standard.txt"));
    }
}
