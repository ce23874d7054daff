//! New-task input shell: a single-line buffer above the list.

/// Placeholder shown while the buffer is empty.
pub const PLACEHOLDER: &str = "Adicionar novo todo...";

/// Text buffer for the add-task field.
///
/// Submission forwards the raw text: no trimming is applied before the
/// duplicate check or storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Take the buffer for submission, leaving the field cleared.
    /// Returns `None` for an empty buffer: the store never sees an
    /// empty title.
    pub fn submit(&mut self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }
}
