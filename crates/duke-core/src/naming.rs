//! Project name and directory parsing
//!
//! The positional `[dir]` argument doubles as the package name. A scoped
//! segment (`@scope`) is kept in the name but never becomes a directory:
//!
//! - `dir/@mono/app` => name `@mono/app`, path `dir/app`
//! - `dir/app` => name `app`, path `dir/app`
//! - `.` => name of the current directory, path `.`

/// Package name and directory path derived from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Name recorded in the project metadata (`package.json`)
    pub app_name: String,
    /// Directory path where the project is created
    pub path: String,
}

impl ParsedName {
    /// Split into `(app_name, path)`
    pub fn into_parts(self) -> (String, String) {
        (self.app_name, self.path)
    }
}

fn is_scope(segment: &str) -> bool {
    segment.starts_with('@')
}

/// Parse the app name and its path from `input`.
///
/// `cwd` supplies the basename of the current directory and is only called
/// when the last segment is `.`. Any string is accepted.
pub fn parse_name_and_path<F>(input: &str, cwd: F) -> ParsedName
where
    F: FnOnce() -> String,
{
    let segments: Vec<&str> = input.split('/').collect();
    let last = segments.last().copied().unwrap_or_default();

    let mut app_name = if last == "." {
        cwd()
    } else {
        last.to_string()
    };

    // The first scope anchors the name; the joined segments keep a literal `.`
    if let Some(scope) = segments.iter().position(|s| is_scope(s)) {
        app_name = segments[scope..].join("/");
    }

    let path = segments
        .iter()
        .filter(|s| !is_scope(s))
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    ParsedName { app_name, path }
}

/// Basename of the current working directory, or `""` if it has none
pub fn current_dir_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> (String, String) {
        parse_name_and_path(input, || "my-project".to_string()).into_parts()
    }

    fn owned(name: &str, path: &str) -> (String, String) {
        (name.to_string(), path.to_string())
    }

    #[test]
    fn test_plain_nested_path() {
        assert_eq!(parse("dir/app"), owned("app", "dir/app"));
    }

    #[test]
    fn test_scoped_name_dropped_from_path() {
        assert_eq!(parse("dir/@mono/app"), owned("@mono/app", "dir/app"));
        assert_eq!(parse("@scope/pkg"), owned("@scope/pkg", "pkg"));
    }

    #[test]
    fn test_dot_uses_current_dir_name() {
        assert_eq!(parse("."), owned("my-project", "."));
        assert_eq!(parse("apps/."), owned("my-project", "apps/."));
    }

    #[test]
    fn test_cwd_not_consulted_without_dot() {
        let parsed = parse_name_and_path("dir/app", || panic!("cwd should not be read"));
        assert_eq!(parsed.app_name, "app");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), owned("", ""));
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(parse("app"), owned("app", "app"));
    }

    #[test]
    fn test_trailing_slash_gives_empty_name() {
        assert_eq!(parse("dir/app/"), owned("", "dir/app/"));
    }

    #[test]
    fn test_first_scope_anchors_name() {
        assert_eq!(parse("dir/@a/@b/app"), owned("@a/@b/app", "dir/app"));
    }

    #[test]
    fn test_leading_slash_not_in_name() {
        assert_eq!(parse("/abs/app"), owned("app", "/abs/app"));
        assert_eq!(parse("/@scope/app"), owned("@scope/app", "/app"));
    }

    // A scoped path ending in `.` keeps the literal dot in the name
    #[test]
    fn test_scoped_dot_keeps_literal_dot() {
        assert_eq!(parse("@scope/."), owned("@scope/.", "."));
        assert_eq!(parse("dir/@scope/."), owned("@scope/.", "dir/."));
    }

    #[test]
    fn test_path_never_contains_scope_segment() {
        for input in ["@a", "@a/b", "x/@a/@b/c", "@/x", "a/b/@c/.", "/", "@a/"] {
            let (_, path) = parse(input);
            assert!(
                path.split('/').all(|s| !s.starts_with('@')),
                "{input:?} produced {path:?}"
            );
        }
    }

    #[test]
    fn test_unscoped_input_round_trips_path() {
        for input in ["a", "a/b", "a/b/c", "./a", "../x/y"] {
            let (name, path) = parse(input);
            assert_eq!(path, input);
            assert_eq!(name, input.rsplit('/').next().unwrap());
        }
    }

    #[test]
    fn test_path_preserves_non_scope_segment_order() {
        let input = "one/@s/two/@t/three";
        let (_, path) = parse(input);
        let expected: Vec<&str> = input.split('/').filter(|s| !s.starts_with('@')).collect();
        assert_eq!(path.split('/').collect::<Vec<_>>(), expected);
    }
}
