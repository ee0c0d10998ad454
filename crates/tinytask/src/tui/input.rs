use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

/// Outcome of feeding a key to a single-line text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TextEdit {
    Changed,
    Ignored,
}

/// Apply printable characters and backspace to `buffer`.
pub(super) fn apply_text_key(buffer: &mut String, key: &KeyEvent) -> TextEdit {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            buffer.push(ch);
            TextEdit::Changed
        }
        KeyCode::Backspace => {
            if pop_grapheme(buffer) {
                TextEdit::Changed
            } else {
                TextEdit::Ignored
            }
        }
        _ => TextEdit::Ignored,
    }
}

/// Remove the last user-perceived character.
pub(super) fn pop_grapheme(buffer: &mut String) -> bool {
    let Some((offset, _)) = buffer.grapheme_indices(true).next_back() else {
        return false;
    };
    buffer.truncate(offset);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_backspace() {
        let mut buffer = String::new();
        for ch in "hi".chars() {
            assert_eq!(apply_text_key(&mut buffer, &key(KeyCode::Char(ch))), TextEdit::Changed);
        }
        assert_eq!(buffer, "hi");
        apply_text_key(&mut buffer, &key(KeyCode::Backspace));
        assert_eq!(buffer, "h");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut buffer = String::from("cafe\u{301}");
        assert!(pop_grapheme(&mut buffer));
        assert_eq!(buffer, "caf");
    }

    #[test]
    fn backspace_on_empty_is_ignored() {
        let mut buffer = String::new();
        assert_eq!(apply_text_key(&mut buffer, &key(KeyCode::Backspace)), TextEdit::Ignored);
    }

    #[test]
    fn control_chords_are_not_inserted() {
        let mut buffer = String::new();
        let chord = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(apply_text_key(&mut buffer, &chord), TextEdit::Ignored);
        assert!(buffer.is_empty());
    }
}
