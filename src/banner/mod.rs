//! DEMOS logo banner
//!
//! Renders the fixed word from static glyph tables and formats the rows as a
//! JavaScript array literal ready to paste into the site's header component.

mod glyphs;

use std::fmt::Write;

use clap::ValueEnum;

use glyphs::{ALTERNATIVE, BLOCK, Glyph, GlyphSet, JULES};

/// The only word the glyph tables cover
pub(crate) const WORD: &str = "DEMOS";

pub(crate) const ROWS: usize = 7;

const LETTER_SPACING: &str = "   ";

/// Minimum width of each emitted row, matching the Jules header format
pub(crate) const PADDED_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BannerStyle {
    /// Full-block characters
    Block,
    /// M/W characters
    Alternative,
    /// Mixed characters like the Jules logo
    Jules,
}

impl BannerStyle {
    pub(crate) const ALL: [BannerStyle; 3] = [BannerStyle::Block, BannerStyle::Alternative, BannerStyle::Jules];

    pub(crate) fn label(self) -> &'static str {
        match self {
            BannerStyle::Block => "Block",
            BannerStyle::Alternative => "Alternative",
            BannerStyle::Jules => "Jules",
        }
    }

    /// Short description used in the preview heading
    pub(crate) fn characters(self) -> &'static str {
        match self {
            BannerStyle::Block => "█ characters",
            BannerStyle::Alternative => "M/W characters",
            BannerStyle::Jules => "Mixed characters",
        }
    }

    pub(crate) fn title(self) -> String {
        format!("{WORD} ASCII Art - {} Style", self.label())
    }

    fn glyphs(self) -> &'static GlyphSet {
        match self {
            BannerStyle::Block => &BLOCK,
            BannerStyle::Alternative => &ALTERNATIVE,
            BannerStyle::Jules => &JULES,
        }
    }

    fn glyph(self, letter: char) -> Option<&'static Glyph> {
        self.glyphs()
            .iter()
            .find_map(|(c, glyph)| (*c == letter).then_some(glyph))
    }
}

/// Build the 7 rows of the banner for `style`
pub(crate) fn render_word(style: BannerStyle) -> Vec<String> {
    let letters: Vec<&Glyph> = WORD.chars().filter_map(|c| style.glyph(c)).collect();
    (0..ROWS)
        .map(|row| {
            letters
                .iter()
                .map(|glyph| glyph[row])
                .collect::<Vec<_>>()
                .join(LETTER_SPACING)
        })
        .collect()
}

/// Format rows as a `const demosLogoText = [...]` block, each row quoted and
/// left-aligned to [`PADDED_WIDTH`] characters
pub(crate) fn format_js_array(rows: &[String], title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "// {title}");
    let _ = writeln!(out, "const demosLogoText = [");
    for row in rows {
        let _ = writeln!(out, "    \"{row:<width$}\",", width = PADDED_WIDTH);
    }
    let _ = writeln!(out, "];");
    let _ = writeln!(out);
    out
}

/// Full generator output: heading, then a preview and array block per style
pub(crate) fn render_report(styles: &[BannerStyle]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ASCII Art Generator for {WORD}");
    let _ = writeln!(out, "{}", "=".repeat(40));
    for (i, style) in styles.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {} Style ({}):", i + 1, style.label(), style.characters());
        let rows = render_word(*style);
        for row in &rows {
            let _ = writeln!(out, "    {row}");
        }
        out.push_str(&format_js_array(&rows, &style.title()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_seven_rows_of_equal_width() {
        for style in BannerStyle::ALL {
            let rows = render_word(style);
            assert_eq!(rows.len(), ROWS);
            let width = rows[0].chars().count();
            // 5 letters of 12 columns plus 4 gaps of 3
            assert_eq!(width, 72, "{style:?}");
            assert!(rows.iter().all(|r| r.chars().count() == width), "{style:?}");
        }
    }

    #[test]
    fn every_letter_exists_in_every_style() {
        for style in BannerStyle::ALL {
            for letter in WORD.chars() {
                assert!(style.glyph(letter).is_some(), "{style:?} missing {letter}");
            }
        }
    }

    #[test]
    fn rows_join_letters_with_spacing() {
        let rows = render_word(BannerStyle::Jules);
        assert!(rows[0].starts_with("XMMMMMMMMKl    XMMMMMMMMMM0   "));
        assert!(rows[6].ends_with(" 0MMMMMMMMK "));
    }

    #[test]
    fn render_is_deterministic() {
        for style in BannerStyle::ALL {
            let first = format_js_array(&render_word(style), &style.title());
            let second = format_js_array(&render_word(style), &style.title());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn js_array_pads_short_rows() {
        let rows = vec!["ab".to_string()];
        let out = format_js_array(&rows, "Tiny");
        let expected = format!(
            "\n// Tiny\nconst demosLogoText = [\n    \"ab{}\",\n];\n\n",
            " ".repeat(58)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn js_array_keeps_long_rows_intact() {
        let rows = render_word(BannerStyle::Block);
        let out = format_js_array(&rows, &BannerStyle::Block.title());
        assert!(out.contains("// DEMOS ASCII Art - Block Style"));
        assert_eq!(out.lines().filter(|l| l.starts_with("    \"")).count(), ROWS);
        for row in &rows {
            assert!(out.contains(&format!("    \"{row}\",")));
        }
    }

    #[test]
    fn report_numbers_styles() {
        let report = render_report(&BannerStyle::ALL);
        assert!(report.starts_with("ASCII Art Generator for DEMOS\n========"));
        assert!(report.contains("1. Block Style (█ characters):"));
        assert!(report.contains("2. Alternative Style (M/W characters):"));
        assert!(report.contains("3. Jules Style (Mixed characters):"));
        assert_eq!(report.matches("const demosLogoText = [").count(), 3);
    }
}
