use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Placeholder pattern: `{{ env.VAR }}` with an optional `| default("...")`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw config text before parsing
///
/// A `default("...")` fallback is substituted when the variable is unset;
/// without a fallback an unset variable is an error, so a missing secret
/// fails at startup instead of producing an empty credential.
pub(crate) fn expand(input: &str) -> Result<String, String> {
    let mut missing: Option<String> = None;

    let expanded = placeholder().replace_all(input, |caps: &Captures<'_>| {
        let var = &caps[1];
        match std::env::var(var) {
            Ok(value) => value,
            Err(_) => caps.get(2).map_or_else(
                || {
                    missing.get_or_insert_with(|| var.to_owned());
                    String::new()
                },
                |default| default.as_str().to_owned(),
            ),
        }
    });

    match missing {
        Some(var) => Err(format!("environment variable not found: `{var}`")),
        None => Ok(expanded.into_owned()),
    }
}
