//! Fixed mapping from project codes to display names.

/// Known project codes and their display names.
pub const PROJECTS: [(&str, &str); 6] = [
    ("PLAN", "Planung & Dokumentation"),
    ("AT", "Academy Tasks"),
    ("AV", "Academy Videos"),
    ("HT", "Helpdesk Tasks"),
    ("HA", "Helpdesk Artikel"),
    ("MEET", "Meetings: Daily & Weekly & POs"),
];

/// Map a project code to its display name. Unknown codes yield `None`.
pub fn project_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    PROJECTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Resolve a `--project` argument: a known code is turned into its name,
/// anything else is taken as a display name.
pub fn resolve_project_arg(arg: &str) -> String {
    let arg = arg.trim();
    project_name(arg)
        .map(str::to_string)
        .unwrap_or_else(|| arg.to_string())
}

/// Group label for rows whose project code is not in [`PROJECTS`].
pub const NO_PROJECT_LABEL: &str = "(kein Projekt)";
