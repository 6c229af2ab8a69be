//! What a command wants shown, kept as typed blocks so the terminal and the
//! browser front end can each lay it out their own way.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OutputBlock {
    /// Room name heading.
    Title(String),
    Text(String),
    /// Something that happened as a result of the command (a chest spilling open).
    Event(String),
    /// The exit line. At most one per output, always last.
    Exits(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank or whitespace-only text never becomes a block.
    fn push(&mut self, text: String, block: fn(String) -> OutputBlock) {
        if !text.trim().is_empty() {
            self.blocks.push(block(text));
        }
    }

    pub fn title(&mut self, s: impl Into<String>) {
        self.push(s.into(), OutputBlock::Title);
    }

    pub fn say(&mut self, s: impl Into<String>) {
        self.push(s.into(), OutputBlock::Text);
    }

    pub fn event(&mut self, s: impl Into<String>) {
        self.push(s.into(), OutputBlock::Event);
    }

    /// Replaces any earlier exit line.
    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// Plain text of every block, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks.iter().map(OutputBlock::text).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.blocks.iter().any(|b| b.text().contains(needle))
    }
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Title(s)
            | OutputBlock::Text(s)
            | OutputBlock::Event(s)
            | OutputBlock::Exits(s) => s.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let mut out = Output::new();
        out.say("  ");
        out.title("");
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn exits_block_stays_last_and_unique() {
        let mut out = Output::new();
        out.set_exits("Exits: north");
        out.say("Hello.");
        out.set_exits("Exits: south");
        assert_eq!(out.lines(), vec!["Hello.", "Exits: south"]);
    }

    #[test]
    fn blocks_keep_their_kind() {
        let mut out = Output::new();
        out.title("Treasure Room");
        out.event("The lid creaks open.");
        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Title("Treasure Room".into()),
                OutputBlock::Event("The lid creaks open.".into()),
            ]
        );
        assert!(out.contains("creaks"));
        assert!(!out.contains("Exits"));
    }
}
