//! POSIX shell quoting for generated command lines.

/// Quote `arg` so a POSIX shell reads it back as exactly one word.
///
/// Arguments made only of safe characters are returned as-is; anything else
/// is wrapped in single quotes, with embedded single quotes spliced in as
/// `'"'"'`.
#[must_use]
pub fn quote(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    if arg.chars().all(is_safe) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r#"'"'"'"#))
}

/// Quote every argument and join them with single spaces.
#[must_use]
pub fn join<S: AsRef<str>>(argv: &[S]) -> String {
    argv.iter()
        .map(|arg| quote(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}
