use crate::entity::{Entity, Indices};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

struct IncludedEntity {
    indices: Indices,
    debug_value: String,
}

/// Renders a text with entities underlined beneath it.
///
/// ```text
/// Hello @gulcin, check #münchen!
///       ╰─────╯Mention("gulcin")
///                      ╰──────╯Hashtag("münchen")
/// ```
///
/// Underlines are placed by display width, so wide CJK characters and
/// multi-byte Latin letters line up with the text above them.
pub struct EntityDisplay<'a> {
    text: &'a str,
    include_entities: Vec<IncludedEntity>,
}

impl<'a> std::fmt::Display for EntityDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // char offset -> display column, with one extra entry for the end
        let mut char_idx_to_display_col = Vec::new();
        let mut width = 0;
        for (byte_idx, c) in self.text.char_indices() {
            char_idx_to_display_col.push(width);
            width += UnicodeWidthStr::width(&self.text[byte_idx..byte_idx + c.len_utf8()]);
        }
        char_idx_to_display_col.push(width);

        f.write_str(self.text)?;

        for entity in self.include_entities.iter() {
            f.write_char('\n')?;

            let last = char_idx_to_display_col.len() - 1;
            let start_col = char_idx_to_display_col[entity.indices.start.min(last)];
            let end_col = char_idx_to_display_col[entity.indices.end.min(last)];

            for _ in 0..start_col {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }

            if end_col - start_col > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&entity.debug_value)?;
        }

        Ok(())
    }
}

impl<'a> EntityDisplay<'a> {
    pub fn new(text: &'a str) -> Self {
        EntityDisplay {
            text,
            include_entities: Vec::new(),
        }
    }

    pub fn include<E: Entity>(&mut self, entities: &[E]) {
        for entity in entities {
            self.include_entities.push(IncludedEntity {
                indices: entity.indices(),
                debug_value: format!("{:?}({:?})", E::KIND, entity.text()),
            });
        }
    }

    /// Takes self
    pub fn with<E: Entity>(mut self, entities: &[E]) -> Self {
        self.include(entities);
        self
    }
}
