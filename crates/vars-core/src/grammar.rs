//! The placeholder catalogue
//!
//! Every recognized token is one [`Placeholder`]. [`Placeholder::ALL`] fixes
//! the order in which a pass tries them; `command` is always last because
//! resolving it has side effects.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Kind of value a placeholder produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// An absolute or relative path
    Path,
    /// A workspace folder or file name
    Name,
    /// Free text from the environment, settings or selection
    Text,
    /// A number rendered as text
    Numeric,
    /// The platform path separator
    Separator,
    /// The result of a command invocation
    Command,
}

/// A recognized `${...}` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    UserHome,
    WorkspaceFolder,
    WorkspaceFolderNamed,
    WorkspaceFolderBasename,
    WorkspaceFolderBasenameNamed,
    File,
    FileWorkspaceFolder,
    RelativeFile,
    RelativeFileDirname,
    FileBasename,
    FileBasenameNoExtension,
    FileDirname,
    FileExtname,
    LineNumber,
    SelectedText,
    Cwd,
    ExecPath,
    PathSeparator,
    PathSeparatorShort,
    Env,
    Config,
    Command,
}

impl Placeholder {
    /// The catalogue in pass order.
    pub const ALL: [Placeholder; 22] = [
        Self::UserHome,
        Self::WorkspaceFolder,
        Self::WorkspaceFolderNamed,
        Self::WorkspaceFolderBasename,
        Self::WorkspaceFolderBasenameNamed,
        Self::File,
        Self::FileWorkspaceFolder,
        Self::RelativeFile,
        Self::RelativeFileDirname,
        Self::FileBasename,
        Self::FileBasenameNoExtension,
        Self::FileDirname,
        Self::FileExtname,
        Self::LineNumber,
        Self::SelectedText,
        Self::Cwd,
        Self::ExecPath,
        Self::PathSeparator,
        Self::PathSeparatorShort,
        Self::Env,
        Self::Config,
        Self::Command,
    ];

    /// Entries handled by the synchronous pass, in order.
    pub fn substitution_order() -> impl Iterator<Item = Placeholder> {
        Self::ALL.into_iter().filter(|p| !p.is_command())
    }

    /// Token name as written between `${` and `}` (or before the `:`).
    pub fn name(self) -> &'static str {
        match self {
            Self::UserHome => "userHome",
            Self::WorkspaceFolder | Self::WorkspaceFolderNamed => "workspaceFolder",
            Self::WorkspaceFolderBasename | Self::WorkspaceFolderBasenameNamed => {
                "workspaceFolderBasename"
            }
            Self::File => "file",
            Self::FileWorkspaceFolder => "fileWorkspaceFolder",
            Self::RelativeFile => "relativeFile",
            Self::RelativeFileDirname => "relativeFileDirname",
            Self::FileBasename => "fileBasename",
            Self::FileBasenameNoExtension => "fileBasenameNoExtension",
            Self::FileDirname => "fileDirname",
            Self::FileExtname => "fileExtname",
            Self::LineNumber => "lineNumber",
            Self::SelectedText => "selectedText",
            Self::Cwd => "cwd",
            Self::ExecPath => "execPath",
            Self::PathSeparator => "pathSeparator",
            Self::PathSeparatorShort => "/",
            Self::Env => "env",
            Self::Config => "config",
            Self::Command => "command",
        }
    }

    /// Placeholder for the captured argument in [`Placeholder::token`].
    fn argument_label(self) -> Option<&'static str> {
        match self {
            Self::WorkspaceFolderNamed
            | Self::WorkspaceFolderBasenameNamed
            | Self::Env
            | Self::Config => Some("NAME"),
            Self::Command => Some("ID"),
            _ => None,
        }
    }

    pub fn takes_argument(self) -> bool {
        self.argument_label().is_some()
    }

    /// Display form, e.g. `${workspaceFolder:NAME}`.
    pub fn token(self) -> String {
        match self.argument_label() {
            Some(label) => format!("${{{}:{}}}", self.name(), label),
            None => format!("${{{}}}", self.name()),
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::UserHome
            | Self::WorkspaceFolder
            | Self::WorkspaceFolderNamed
            | Self::File
            | Self::FileWorkspaceFolder
            | Self::RelativeFile
            | Self::RelativeFileDirname
            | Self::FileDirname
            | Self::Cwd
            | Self::ExecPath => Category::Path,
            Self::WorkspaceFolderBasename
            | Self::WorkspaceFolderBasenameNamed
            | Self::FileBasename
            | Self::FileBasenameNoExtension
            | Self::FileExtname => Category::Name,
            Self::SelectedText | Self::Env | Self::Config => Category::Text,
            Self::LineNumber => Category::Numeric,
            Self::PathSeparator | Self::PathSeparatorShort => Category::Separator,
            Self::Command => Category::Command,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::UserHome => "home directory",
            Self::WorkspaceFolder => "path of the first workspace folder",
            Self::WorkspaceFolderNamed => "path of the workspace folder named NAME",
            Self::WorkspaceFolderBasename => "name of the first workspace folder",
            Self::WorkspaceFolderBasenameNamed => "name of the workspace folder named NAME",
            Self::File => "active file path",
            Self::FileWorkspaceFolder => "workspace folder containing the active file",
            Self::RelativeFile => "active file relative to its workspace folder",
            Self::RelativeFileDirname => "directory of the relative active file",
            Self::FileBasename => "active file name",
            Self::FileBasenameNoExtension => "active file name without extension",
            Self::FileDirname => "directory of the active file",
            Self::FileExtname => "extension of the active file",
            Self::LineNumber => "1-based cursor line, 0 without a cursor",
            Self::SelectedText => "selected text",
            Self::Cwd => "directory of the active file",
            Self::ExecPath => "host executable path",
            Self::PathSeparator | Self::PathSeparatorShort => "platform path separator",
            Self::Env => "environment variable NAME",
            Self::Config => "settings value NAME",
            Self::Command => "result of invoking command ID",
        }
    }

    pub fn is_command(self) -> bool {
        matches!(self, Self::Command)
    }

    /// Whether a leftover occurrence makes a recursive resolution run
    /// another pass.
    pub fn triggers_recursion(self) -> bool {
        !matches!(self, Self::File | Self::ExecPath | Self::UserHome)
    }

    /// Compiled pattern; the argument, if any, is capture group 1.
    pub fn pattern(self) -> &'static Regex {
        &PATTERNS[self as usize]
    }

    fn pattern_source(self) -> String {
        let name = regex::escape(self.name());
        if self.takes_argument() {
            // Non-greedy: the argument stops at the first `}`
            format!(r"\$\{{{}:(.*?)\}}", name)
        } else {
            format!(r"\$\{{{}\}}", name)
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Placeholder::ALL
        .iter()
        .map(|p| Regex::new(&p.pattern_source()).expect("Invalid placeholder regex"))
        .collect()
});

static RESIDUAL: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = Placeholder::ALL
        .iter()
        .filter(|p| p.triggers_recursion())
        .map(|p| p.pattern_source())
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("Invalid residual regex")
});

/// Whether `text` still holds a token that warrants another recursive pass.
pub fn has_residual(text: &str) -> bool {
    text.contains("${") && RESIDUAL.is_match(text)
}

/// One recognized token occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    pub placeholder: Placeholder,
    /// The token text, `${` through `}`
    pub token: String,
    pub argument: Option<String>,
    /// Byte range of the whole token in the scanned text
    pub range: Range<usize>,
}

/// Every recognized token in `text`, in source order.
///
/// Where two patterns claim overlapping text (`${env:${file}}`), the one
/// starting first wins.
pub fn scan(text: &str) -> Vec<TokenMatch> {
    let mut found: Vec<TokenMatch> = Placeholder::ALL
        .iter()
        .flat_map(|&placeholder| {
            placeholder
                .pattern()
                .captures_iter(text)
                .filter_map(move |caps| {
                    let whole = caps.get(0)?;
                    Some(TokenMatch {
                        placeholder,
                        token: whole.as_str().to_string(),
                        argument: caps.get(1).map(|m| m.as_str().to_string()),
                        range: whole.range(),
                    })
                })
        })
        .collect();

    found.sort_by_key(|m| (m.range.start, m.range.end));

    let mut tokens: Vec<TokenMatch> = Vec::with_capacity(found.len());
    for candidate in found {
        let overlaps = tokens
            .last()
            .is_some_and(|last| candidate.range.start < last.range.end);
        if !overlaps {
            tokens.push(candidate);
        }
    }
    tokens
}
