//! The synchronous substitution pass
//!
//! Each non-command placeholder is applied in catalogue order as a global
//! find-and-replace. Substituted text is never rescanned within the same
//! pass, so a value that happens to contain `${...}` survives verbatim until
//! a recursive pass (or, for `${command:...}`, the command loop) sees it.

use crate::grammar::Placeholder;
use vars_context::{ContextProvider, NormalizedPath};

/// A piece of the string being rewritten.
enum Segment {
    /// Text still subject to later patterns in this pass
    Template(String),
    /// Substituted value, frozen for the rest of the pass
    Resolved(String),
}

/// Replace every non-command placeholder in `template`.
///
/// Pure: reads `context` and performs no I/O. Tokens whose context value is
/// missing become empty; unknown tokens and `${command:...}` are left alone.
pub fn substitute(template: &str, context: &dyn ContextProvider) -> String {
    if !template.contains("${") {
        return template.to_string();
    }

    let mut segments = vec![Segment::Template(template.to_string())];
    for placeholder in Placeholder::substitution_order() {
        segments = apply(placeholder, segments, context);
    }

    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Template(text) | Segment::Resolved(text) => text,
        })
        .collect()
}

fn apply(
    placeholder: Placeholder,
    segments: Vec<Segment>,
    context: &dyn ContextProvider,
) -> Vec<Segment> {
    let pattern = placeholder.pattern();
    // Argument-free tokens have one value per pass; compute it at most once
    let mut shared: Option<Option<String>> = None;
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        let text = match segment {
            Segment::Template(text) if text.contains("${") => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let replacement = match caps.get(1) {
                Some(argument) => value_of(placeholder, Some(argument.as_str()), context),
                None => shared
                    .get_or_insert_with(|| value_of(placeholder, None, context))
                    .clone(),
            };
            let Some(replacement) = replacement else {
                continue;
            };

            tracing::trace!(token = %placeholder, "Substituted placeholder");
            if whole.start() > last {
                out.push(Segment::Template(text[last..whole.start()].to_string()));
            }
            out.push(Segment::Resolved(replacement));
            last = whole.end();
        }

        if last < text.len() {
            out.push(Segment::Template(text[last..].to_string()));
        }
    }

    out
}

/// Value for one token occurrence. `None` leaves the token in place.
fn value_of(
    placeholder: Placeholder,
    argument: Option<&str>,
    context: &dyn ContextProvider,
) -> Option<String> {
    let separator = context.path_separator();
    let render = |path: Option<NormalizedPath>| {
        path.map(|p| p.render(separator)).unwrap_or_default()
    };
    let file = || context.active_file_path();

    let value = match placeholder {
        Placeholder::UserHome => render(context.home_directory()),
        Placeholder::WorkspaceFolder => render(
            context
                .list_workspace_folders()
                .into_iter()
                .next()
                .map(|folder| folder.path),
        ),
        Placeholder::WorkspaceFolderNamed => render(
            argument
                .and_then(|name| context.workspace_folder_named(name))
                .map(|folder| folder.path),
        ),
        Placeholder::WorkspaceFolderBasename => context
            .list_workspace_folders()
            .into_iter()
            .next()
            .map(|folder| folder.name)
            .unwrap_or_default(),
        Placeholder::WorkspaceFolderBasenameNamed => argument
            .and_then(|name| context.workspace_folder_named(name))
            .map(|folder| folder.name)
            .unwrap_or_default(),
        Placeholder::File => render(file()),
        Placeholder::FileWorkspaceFolder => {
            render(file().and_then(|path| context.workspace_folder_containing(&path)))
        }
        Placeholder::RelativeFile => render(file().map(|path| relative_to_owner(&path, context))),
        Placeholder::RelativeFileDirname => render(
            file().and_then(|path| relative_to_owner(&path, context).parent()),
        ),
        Placeholder::FileBasename => file()
            .and_then(|path| path.file_name().map(str::to_string))
            .unwrap_or_default(),
        Placeholder::FileBasenameNoExtension => file()
            .and_then(|path| path.file_stem().map(str::to_string))
            .unwrap_or_default(),
        Placeholder::FileDirname | Placeholder::Cwd => {
            render(file().and_then(|path| path.parent()))
        }
        Placeholder::FileExtname => file()
            .and_then(|path| path.extension().map(str::to_string))
            .unwrap_or_default(),
        Placeholder::LineNumber => context
            .selection()
            .map_or(0, |selection| selection.line_number())
            .to_string(),
        Placeholder::SelectedText => context
            .selection()
            .map(|selection| selection.text)
            .unwrap_or_default(),
        Placeholder::ExecPath => render(context.host_executable_path()),
        Placeholder::PathSeparator | Placeholder::PathSeparatorShort => separator.to_string(),
        Placeholder::Env => argument
            .and_then(|name| context.environment_variable(name))
            .unwrap_or_default(),
        Placeholder::Config => argument
            .map(|key| context.configuration_value(key, ""))
            .unwrap_or_default(),
        // Resolved by the command loop after this pass
        Placeholder::Command => return None,
    };

    Some(value)
}

/// The active file relative to the workspace folder that owns it, or the
/// file itself when no folder does.
fn relative_to_owner(file: &NormalizedPath, context: &dyn ContextProvider) -> NormalizedPath {
    context
        .workspace_folder_containing(file)
        .and_then(|owner| file.strip_prefix(&owner))
        .unwrap_or_else(|| file.clone())
}
