//! Workspace folders and editor selection state

use crate::NormalizedPath;

/// A named root directory of the editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    pub name: String,
    pub path: NormalizedPath,
}

impl WorkspaceFolder {
    pub fn new(name: impl Into<String>, path: impl Into<NormalizedPath>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a folder named after the last component of its path.
    pub fn from_path(path: impl Into<NormalizedPath>) -> Self {
        let path = path.into();
        let name = path.file_name().unwrap_or_default().to_string();
        Self { name, path }
    }
}

/// A zero-based line/character position in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// The active selection. An empty selection is just the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
    /// Text covered by the selection
    pub text: String,
}

impl Selection {
    /// A collapsed selection at `line`, i.e. a bare cursor.
    pub fn cursor(line: u32, character: u32) -> Self {
        let at = Position::new(line, character);
        Self {
            start: at,
            end: at,
            text: String::new(),
        }
    }

    pub fn new(start: Position, end: Position, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// One-based line of the selection start, as shown in editor gutters.
    pub fn line_number(&self) -> u32 {
        self.start.line + 1
    }
}
