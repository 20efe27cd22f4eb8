//! A crate for loading block-letter glyph fonts and rendering text as banners.
//!
//! # Features
//!
//! - Glyph fonts decoded from plain text blocks, one per printable ASCII character
//!   ([`Font`](crate::font::Font))
//! - Literal `\n` escapes as line separators
//! - Per-character color highlighting of a case-insensitive substring
//!   ([`Color`](crate::render::Color))
//! - Left, right, center and justify alignment ([`Alignment`](crate::render::Alignment))
//!
//! # Example
//!
//! ```
//! # use bannr::font::Font;
//! # use bannr::render::Renderer;
//! // A font may define only a prefix of the character set; here the space and `!`.
//! let source = concat!(
//!     "\n",
//!     "  \n  \n  \n  \n  \n  \n  \n  \n",
//!     "\n",
//!     "| \n| \n| \n| \n  \n| \n  \n  \n",
//! );
//! let font = Font::from_bytes(source);
//! let banner = Renderer::new(&font).render("! !");
//! assert_eq!(
//!     banner.lines(),
//!     ["|   | ", "|   | ", "|   | ", "|   | ", "      ", "|   | ", "      ", "      "]
//! );
//! ```

pub mod font;
pub mod render;
mod str_ext;
