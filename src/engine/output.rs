use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum OutputBlock {
    Title(String),
    Text(String),
    /// A " - entry" line under a heading.
    Entry(String),
    /// A horizontal rule drawn with `ch`.
    Rule { ch: char, width: usize },
    /// A prompt that expects an answer on the same line.
    Prompt(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn entry(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Entry(s.into()));
    }

    pub fn rule(&mut self, ch: char, width: usize) {
        self.blocks.push(OutputBlock::Rule { ch, width });
    }

    pub fn prompt(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Prompt(s.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Plain-text rendering, one line per block (prompts end without a newline).
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for block in &self.blocks {
            match block {
                OutputBlock::Title(t) | OutputBlock::Text(t) => {
                    text.push_str(t);
                    text.push('\n');
                }
                OutputBlock::Entry(e) => {
                    text.push_str(" - ");
                    text.push_str(e);
                    text.push('\n');
                }
                OutputBlock::Rule { ch, width } => {
                    text.extend(std::iter::repeat_n(*ch, *width));
                    text.push('\n');
                }
                OutputBlock::Prompt(p) => {
                    text.push_str(p);
                    text.push(' ');
                }
            }
        }
        text
    }

    /// True if any text-bearing block contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.to_text().contains(needle)
    }
}
