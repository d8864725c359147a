/// System clipboard, plain text only.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
    fn read_text(&self) -> Option<String>;
}

/// In-process clipboard for tests and headless replays.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    fn read_text(&self) -> Option<String> {
        self.text.clone()
    }
}
