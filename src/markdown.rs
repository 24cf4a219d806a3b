//! Lightweight markdown rendering for model replies
//!
//! Rendering is an ordered pipeline of independent string stages. The order
//! is load-bearing: escaping runs before any markup is produced, list
//! grouping runs on raw lines before headings, and bold runs before italic
//! so that `**` is never half-consumed.
//!
//! Only a small subset of markdown is understood. Anything else renders
//! literally.

use regex::Regex;
use std::sync::LazyLock;

#[cfg(test)]
mod proptests;

/// A single rendering stage
pub type Stage = fn(&str) -> String;

/// Rendering stages in application order
pub const PIPELINE: [(&str, Stage); 7] = [
    ("escape", escape_html),
    ("bullet_lists", group_bullet_lists),
    ("headings", headings),
    ("bold", bold),
    ("italic", italic),
    ("inline_code", inline_code),
    ("line_breaks", line_breaks),
];

/// Tags that end a block; a newline right after one is not a line break
const BLOCK_CLOSERS: [&str; 5] = ["</li>", "</ul>", "</h1>", "</h2>", "</h3>"];

static H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").expect("H3 regex pattern is valid"));
static H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").expect("H2 regex pattern is valid"));
static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").expect("H1 regex pattern is valid"));

static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("BOLD_STARS regex pattern is valid"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("BOLD_UNDERSCORES regex pattern is valid"));

// No whitespace just inside the stars and no stars inside; one character is enough.
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^\s*](?:[^*\n]*[^\s*])?)\*").expect("ITALIC_STAR regex pattern is valid")
});
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_\n]+)_").expect("ITALIC_UNDERSCORE regex pattern is valid"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("INLINE_CODE regex pattern is valid"));

/// Render markdown text as an HTML fragment.
///
/// Never fails. Empty input renders as an empty string.
#[must_use]
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    PIPELINE
        .iter()
        .fold(text.to_string(), |acc, (_, stage)| stage(&acc))
}

/// Render optional text; absent text renders as an empty string.
#[must_use]
pub fn render_optional(text: Option<&str>) -> String {
    text.map(render).unwrap_or_default()
}

/// Escape the characters HTML reserves.
///
/// `&` goes first so the entities introduced afterwards are left intact.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Item text of a bullet line: `* ` not followed by another `*`.
fn bullet_item(line: &str) -> Option<&str> {
    let item = line.strip_prefix("* ")?;
    if item.starts_with('*') {
        None
    } else {
        Some(item)
    }
}

fn close_list(lines: &mut [String]) {
    if let Some(last) = lines.last_mut() {
        last.push_str("</ul>");
    }
}

/// Wrap each run of consecutive bullet lines in `<ul>`/`<li>` tags.
#[must_use]
pub fn group_bullet_lists(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut in_list = false;

    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(item) = bullet_item(line) {
            let open = if in_list { "" } else { "<ul>" };
            lines.push(format!("{open}<li>{item}</li>"));
            in_list = true;
        } else {
            if in_list {
                close_list(&mut lines);
                in_list = false;
            }
            lines.push(line.to_string());
        }
    }

    if in_list {
        close_list(&mut lines);
    }

    lines.join("\n")
}

/// `#`, `##` and `###` lines become `<h1>` to `<h3>`.
#[must_use]
pub fn headings(text: &str) -> String {
    let text = H3.replace_all(text, "<h3>${1}</h3>");
    let text = H2.replace_all(&text, "<h2>${1}</h2>");
    H1.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// `**text**` and `__text__` become `<strong>`.
#[must_use]
pub fn bold(text: &str) -> String {
    let text = BOLD_STARS.replace_all(text, "<strong>${1}</strong>");
    BOLD_UNDERSCORES
        .replace_all(&text, "<strong>${1}</strong>")
        .into_owned()
}

/// `*text*` and `_text_` become `<em>`.
#[must_use]
pub fn italic(text: &str) -> String {
    let text = ITALIC_STAR.replace_all(text, "<em>${1}</em>");
    ITALIC_UNDERSCORE
        .replace_all(&text, "<em>${1}</em>")
        .into_owned()
}

/// `` `text` `` becomes `<code>`.
#[must_use]
pub fn inline_code(text: &str) -> String {
    INLINE_CODE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

/// Convert remaining newlines into `<br>` tags.
#[must_use]
pub fn line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            let after_block = BLOCK_CLOSERS.iter().any(|tag| out.ends_with(tag));
            out.push_str(if after_block { "\n" } else { "<br>" });
        }
        out.push_str(line);
    }
    out
}
