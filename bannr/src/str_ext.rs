const ESCAPE: char = '\x1b';

pub(crate) trait StrExt {
    fn char_width(&self) -> usize;
    fn visible_width(&self) -> usize;
}

impl StrExt for str {
    fn char_width(&self) -> usize {
        self.chars().count()
    }

    /// Width in chars, not counting SGR escape sequences (`ESC [ ... m`).
    fn visible_width(&self) -> usize {
        let mut width = 0;
        let mut chars = self.chars();
        while let Some(c) = chars.next() {
            if c == ESCAPE {
                // the final byte of a CSI sequence is in `@..=~`
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) && c != '[' {
                        break;
                    }
                }
            } else {
                width += 1;
            }
        }
        width
    }
}
