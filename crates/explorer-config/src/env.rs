use std::sync::OnceLock;

use regex::Regex;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` with an optional `| default("fallback")`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// A missing variable is an error unless the placeholder carries a
/// `default("...")`. TOML comment lines are passed through unexpanded.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut lines = Vec::with_capacity(input.lines().count());

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }
        lines.push(expand_line(line)?);
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, String> {
    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for captures in placeholder_re().captures_iter(line) {
        let whole = captures.get(0).expect("group 0 always present");
        let var_name = &captures[1];

        expanded.push_str(&line[cursor..whole.start()]);

        match std::env::var(var_name) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => match captures.get(2) {
                Some(fallback) => expanded.push_str(fallback.as_str()),
                None => return Err(format!("environment variable not found: `{var_name}`")),
            },
        }

        cursor = whole.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}
