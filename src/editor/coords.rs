//! Buffer column ↔ display column mapping.
//!
//! A buffer column (`cx`) is a byte offset into a line. A display column
//! (`dx`) is where that byte lands on screen once tabs are expanded to the
//! next multiple of the tab width. Movement, scrolling and rendering all go
//! through these two functions.

/// Display width of `byte` when it starts at display column `dx`.
pub const fn byte_width(byte: u8, dx: usize, tab_width: usize) -> usize {
    if byte == b'\t' {
        tab_width - dx % tab_width
    } else {
        1
    }
}

/// Display column of buffer column `cx`.
///
/// Columns past the end of the line count as one cell each.
pub fn column_to_display(text: &[u8], cx: usize, tab_width: usize) -> usize {
    debug_assert!(tab_width > 0);
    let mut dx = 0;
    for &byte in text.iter().take(cx) {
        dx += byte_width(byte, dx, tab_width);
    }
    dx + cx.saturating_sub(text.len())
}

/// Buffer column whose display position first reaches `dx`.
///
/// A target inside a tab lands on the byte after the tab. The result never
/// exceeds the line length.
pub fn display_to_column(text: &[u8], dx: usize, tab_width: usize) -> usize {
    debug_assert!(tab_width > 0);
    let mut width = 0;
    let mut cx = 0;
    while cx < text.len() && width < dx {
        width += byte_width(text[cx], width, tab_width);
        cx += 1;
    }
    cx
}

/// Total display width of a line.
pub fn display_width(text: &[u8], tab_width: usize) -> usize {
    column_to_display(text, text.len(), tab_width)
}

/// Expand tabs to spaces, producing one byte per display cell.
pub fn expand_tabs(text: &[u8], tab_width: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for &byte in text {
        if byte == b'\t' {
            let width = byte_width(byte, out.len(), tab_width);
            out.extend(std::iter::repeat_n(b' ', width));
        } else {
            out.push(byte);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_maps_one_to_one() {
        let text = b"hello world";
        for cx in 0..=text.len() {
            assert_eq!(column_to_display(text, cx, 4), cx);
            assert_eq!(display_to_column(text, cx, 4), cx);
        }
    }

    #[test]
    fn test_leading_tab_expands_to_tab_width() {
        let text = b"\thello world";
        assert_eq!(column_to_display(text, 1, 4), 4);
        assert_eq!(column_to_display(text, 2, 4), 5);
    }

    #[test]
    fn test_tab_advances_to_next_stop() {
        let text = b"ab\tc";
        assert_eq!(column_to_display(text, 3, 4), 4);
        assert_eq!(column_to_display(text, 3, 8), 8);
    }

    #[test]
    fn test_display_inside_tab_lands_after_tab() {
        let text = b"\tx";
        assert_eq!(display_to_column(text, 0, 4), 0);
        assert_eq!(display_to_column(text, 1, 4), 1);
        assert_eq!(display_to_column(text, 3, 4), 1);
        assert_eq!(display_to_column(text, 4, 4), 1);
        assert_eq!(display_to_column(text, 5, 4), 2);
    }

    #[test]
    fn test_display_to_column_clamps_to_line_length() {
        assert_eq!(display_to_column(b"abc", 10, 4), 3);
        assert_eq!(display_to_column(b"", 10, 4), 0);
    }

    #[test]
    fn test_vertical_move_keeps_visual_column() {
        let upper = b"\tfoo";
        let lower = b"abcdefgh";
        let dx = column_to_display(upper, 2, 4);
        assert_eq!(dx, 5);
        assert_eq!(display_to_column(lower, dx, 4), 5);
        assert_eq!(display_to_column(upper, column_to_display(lower, 5, 4), 4), 2);
    }

    #[test]
    fn test_expand_tabs_matches_display_width() {
        let text = b"a\tbc\td";
        let expanded = expand_tabs(text, 4);
        assert_eq!(expanded, b"a   bc  d");
        assert_eq!(expanded.len(), display_width(text, 4));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn line_strategy() -> impl Strategy<Value = Vec<u8>> {
            proptest::collection::vec(prop_oneof![Just(b'\t'), b'a'..=b'z'], 0..40)
        }

        proptest! {
            #[test]
            fn display_column_is_monotonic(text in line_strategy(), tab in 1..9usize) {
                let mut last = 0;
                for cx in 0..=text.len() {
                    let dx = column_to_display(&text, cx, tab);
                    prop_assert!(dx >= last);
                    last = dx;
                }
            }

            #[test]
            fn mapping_round_trips_on_byte_boundaries(text in line_strategy(), tab in 1..9usize) {
                for cx in 0..=text.len() {
                    let dx = column_to_display(&text, cx, tab);
                    prop_assert_eq!(display_to_column(&text, dx, tab), cx);
                }
            }
        }
    }
}
