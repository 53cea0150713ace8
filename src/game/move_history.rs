//! Text record of the moves played so far.

use std::fmt;

use crate::board::board_utils::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub color: Color,
    pub fullmove_number: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, color: Color, fullmove_number: u32, text: impl Into<String>) {
        self.entries.push(HistoryEntry {
            color,
            fullmove_number,
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Whether `color` has castled, read from the recorded text.
    pub fn has_castled(&self, color: Color) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.color == color && entry.text.starts_with("0-0"))
    }
}

/// `1. e4 e5 2. Nf3`, with `1... e5` when Black moved first.
impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match entry.color {
                Color::White => write!(f, "{}. {}", entry.fullmove_number, entry.text)?,
                Color::Black if i == 0 => write!(f, "{}... {}", entry.fullmove_number, entry.text)?,
                Color::Black => f.write_str(&entry.text)?,
            }
        }
        Ok(())
    }
}
