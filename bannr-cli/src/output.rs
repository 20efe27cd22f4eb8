use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use bannr::render::Banner;
use log::info;

/// Where a rendered banner goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn new(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Writes every line of the banner followed by a newline.
    pub fn write(&self, banner: &Banner) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                write!(stdout, "{banner}").context("failed to write to stdout")?;
                stdout.flush().context("failed to write to stdout")?;
            }
            Self::File(path) => {
                fs::write(path, banner.to_string())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("wrote {} lines to {}", banner.lines().len(), path.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bannr::font::Font;

    use super::Destination;

    #[test]
    fn write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.txt");
        let font = Font::from_bytes("\n##\n##\n##\n##\n##\n##\n##\n##\n");
        let banner = font.render("  ");
        Destination::new(Some(path.clone())).write(&banner).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "####\n".repeat(8));
    }

    #[test]
    fn write_empty_banner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        Destination::File(path.clone())
            .write(&Font::default().render(""))
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("banner.txt");
        let error = Destination::File(path).write(&Font::default().render("a"));
        assert!(error.is_err());
    }
}
