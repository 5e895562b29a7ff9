//! Utility helpers shared across integration tests.

use tabulate::display_width;

/// Build a `Vec<String>` from a list of string slices.
///
/// Used to spell out header and row cells without `to_string` noise.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Assert every line of `rendered` is exactly `expected` columns wide.
pub fn assert_uniform_width(rendered: &str, expected: usize) {
    assert!(rendered.ends_with('\n'), "output must end with a newline");
    for line in rendered.lines() {
        assert_eq!(display_width(line), expected, "misaligned line: {line:?}");
    }
}
