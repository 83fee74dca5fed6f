//! Inserting emoticons into text inputs.
//!
//! The parser does not know about any UI toolkit. A widget that wants to
//! receive emoticons implements [`CaretInput`]; [`TextBuffer`] is a plain
//! in-memory implementation usable by terminal front-ends and tests.
//!
//! Caret positions are byte offsets into the value and are clamped to the
//! nearest char boundary at or before them.

pub trait CaretInput {
    fn value(&self) -> &str;

    /// Caret position, or `None` when the widget does not track one.
    fn caret(&self) -> Option<usize>;

    fn set_value(&mut self, value: String);

    fn set_caret(&mut self, caret: usize);

    fn focus(&mut self) {}
}

/// Insert `text` at the caret of `input`, padded with spaces, then focus the
/// input and move the caret to the end.
///
/// Without a caret the text is appended after a single space.
pub(crate) fn insert_at_caret<I: CaretInput + ?Sized>(input: &mut I, text: &str) {
    let value = input.value();
    let updated = match input.caret() {
        Some(caret) => {
            let mut at = caret.min(value.len());
            while !value.is_char_boundary(at) {
                at -= 1;
            }
            let (before, after) = value.split_at(at);
            format!("{before} {text} {after}")
        }
        None => format!("{value} {text}"),
    };
    let end = updated.len();
    input.set_value(updated);
    input.focus();
    input.set_caret(end);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    caret: Option<usize>,
    focused: bool,
}

impl TextBuffer {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = Some(value.len());
        Self { value, caret, focused: false }
    }

    /// A buffer that does not track a caret.
    pub fn without_caret(value: impl Into<String>) -> Self {
        Self { value: value.into(), caret: None, focused: false }
    }

    pub fn with_caret(mut self, caret: usize) -> Self {
        self.caret = Some(caret);
        self
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl CaretInput for TextBuffer {
    fn value(&self) -> &str {
        &self.value
    }

    fn caret(&self) -> Option<usize> {
        self.caret
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn set_caret(&mut self, caret: usize) {
        if self.caret.is_some() {
            self.caret = Some(caret.min(self.value.len()));
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_padded_text_at_caret() {
        let mut buf = TextBuffer::new("hello world").with_caret(5);
        insert_at_caret(&mut buf, ":)");
        assert_eq!(buf.value(), "hello :)  world");
        assert_eq!(buf.caret(), Some(buf.value().len()));
        assert!(buf.is_focused());
    }

    #[test]
    fn appends_without_caret() {
        let mut buf = TextBuffer::without_caret("hello");
        insert_at_caret(&mut buf, "(wink)");
        assert_eq!(buf.value(), "hello (wink)");
        assert_eq!(buf.caret(), None);
    }

    #[test]
    fn caret_inside_a_char_is_clamped() {
        let mut buf = TextBuffer::new("é!").with_caret(1);
        insert_at_caret(&mut buf, ";)");
        assert_eq!(buf.value(), " ;) é!");
    }

    #[test]
    fn caret_past_end_appends() {
        let mut buf = TextBuffer::new("hi").with_caret(99);
        insert_at_caret(&mut buf, "<3");
        assert_eq!(buf.value(), "hi <3 ");
    }
}
