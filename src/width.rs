//! Display width measurement.
//!
//! Every size computation in the crate goes through [`display_width`] so
//! that wide glyphs (East Asian ideographs, most emoji) count as two
//! terminal columns and never as their byte or code point length.

use unicode_width::UnicodeWidthStr;

/// Number of terminal columns `text` occupies when printed.
///
/// # Examples
///
/// ```
/// use tabulate::display_width;
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
#[must_use]
pub fn display_width(text: &str) -> usize { UnicodeWidthStr::width(text) }

/// Byte index of the longest prefix of `text` that fits in `max` columns.
///
/// A glyph is never split: if the next glyph would overflow the limit the
/// prefix stops before it. When even the first glyph does not fit, the
/// index just after it is returned instead so callers always make progress.
/// Returns `text.len()` when the whole string fits.
#[must_use]
pub fn split_at_width(text: &str, max: usize) -> usize {
    let mut fit = 0;
    for (idx, ch) in text.char_indices() {
        let end = idx + ch.len_utf8();
        if display_width(&text[..end]) > max {
            return if fit == 0 { end } else { fit };
        }
        fit = end;
    }
    text.len()
}

/// Pad `text` on the right with spaces up to `width` columns.
pub(crate) fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Pad `text` on the left with spaces up to `width` columns.
pub(crate) fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(fill))
}

/// Centre `text` in `width` columns; an odd leftover goes before the text.
pub(crate) fn pad_center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    let before = fill.div_ceil(2);
    format!("{}{text}{}", " ".repeat(before), " ".repeat(fill - before))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(display_width("漢"), 2);
        assert_eq!("漢".len(), 3);
        assert_eq!(display_width("a漢b"), 4);
    }

    #[test]
    fn split_never_halves_a_wide_glyph() {
        assert_eq!(split_at_width("漢字", 3), "漢".len());
        assert_eq!(split_at_width("漢字", 4), "漢字".len());
        assert_eq!(split_at_width("abc", 2), 2);
    }

    #[test]
    fn split_always_advances() {
        assert_eq!(split_at_width("漢字", 1), "漢".len());
        assert_eq!(split_at_width("abc", 0), 1);
        assert_eq!(split_at_width("", 0), 0);
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_left("漢", 4), "  漢");
        assert_eq!(pad_right("漢", 4), "漢  ");
        assert_eq!(pad_center("ab", 5), "  ab ");
        assert_eq!(pad_center("ab", 6), "  ab  ");
        assert_eq!(pad_center("toolong", 3), "toolong");
    }
}
