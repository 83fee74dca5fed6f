//! Mirrored symbol forms.
//!
//! Most symbolic emoticons read the same when written right-to-left with the
//! brackets swapped: `:-)` becomes `(-:`. Symbols that use `D` or `3` as a
//! picture (`:D`, `<3`, `</3`) have no sensible mirror and produce an empty
//! string, which the trie builder skips.

/// Mirror `symbol`, or return an empty string when it cannot be mirrored.
///
/// ```text
/// ":-)"  -> "(-:"
/// ":/"   -> "\:"
/// "</3"  -> ""
/// ```
pub fn mirror(symbol: &str) -> String {
    let mut out = String::with_capacity(symbol.len());
    for c in symbol.chars().rev() {
        let mapped = match c {
            ')' => '(',
            '(' => ')',
            ']' => '[',
            '[' => ']',
            '/' => '\\',
            '<' => '>',
            'D' | '3' => return String::new(),
            other => other,
        };
        out.push(mapped);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_brackets_and_slashes() {
        let cases = [(":)", "(:"), (":-)", "(-:"), (":]", "[:"), (":-[", "]-:"), (":/", "\\:"), (";-)", "(-;")];
        for (input, expected) in cases {
            assert_eq!(mirror(input), expected, "mirror({input:?})");
        }
    }

    #[test]
    fn letters_are_reversed_unchanged() {
        assert_eq!(mirror(":-O"), "O-:");
        assert_eq!(mirror(":o"), "o:");
    }

    #[test]
    fn pictures_cannot_be_mirrored() {
        for symbol in [":D", ":-D", "<3", "</3", "3<"] {
            assert_eq!(mirror(symbol), "", "mirror({symbol:?})");
        }
    }

    #[test]
    fn closing_angle_is_copied() {
        // Only `<` is remapped; `>` passes through as-is.
        assert_eq!(mirror(">:("), "):>");
        assert_eq!(mirror("<:"), ":>");
    }

    #[test]
    fn empty_symbol_mirrors_to_empty() {
        assert_eq!(mirror(""), "");
    }
}
