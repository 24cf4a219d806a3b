//! Property-based tests for the markdown renderer

use super::*;
use proptest::prelude::*;

/// Every tag the pipeline can produce
const GENERATED_TAGS: [&str; 16] = [
    "<ul>", "</ul>", "<li>", "</li>", "<h1>", "</h1>", "<h2>", "</h2>", "<h3>", "</h3>",
    "<strong>", "</strong>", "<em>", "</em>", "<code>", "</code>",
];

const ENTITIES: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];

fn strip_generated_tags(html: &str) -> String {
    let mut out = html.replace("<br>", "");
    for tag in GENERATED_TAGS {
        out = out.replace(tag, "");
    }
    out
}

fn arb_markdownish() -> impl Strategy<Value = String> {
    "[a-z <>&\"*_`#\n]{0,80}"
}

proptest! {
    /// Reserved characters from the input never survive unescaped
    #[test]
    fn prop_input_markup_is_escaped(text in arb_markdownish()) {
        let html = render(&text);
        let rest = strip_generated_tags(&html);

        prop_assert!(!rest.contains('<'), "raw '<' in {:?}", html);
        prop_assert!(!rest.contains('>'), "raw '>' in {:?}", html);
        prop_assert!(!rest.contains('"'), "raw '\"' in {:?}", html);

        for (index, _) in rest.match_indices('&') {
            let tail = rest.get(index..).unwrap_or_default();
            prop_assert!(
                ENTITIES.iter().any(|entity| tail.starts_with(entity)),
                "bare '&' in {:?}", html
            );
        }
    }

    /// Arbitrary unicode input never panics
    #[test]
    fn prop_render_is_total(text in any::<String>()) {
        let _ = render(&text);
    }

    /// Text without markdown syntax only has its newlines converted
    #[test]
    fn prop_plain_text_only_gains_line_breaks(text in "[a-zA-Z0-9 .,!?\n]{0,80}") {
        prop_assert_eq!(render(&text), text.replace('\n', "<br>"));
    }

    /// Every opened list is closed
    #[test]
    fn prop_lists_are_balanced(text in "(\\* [a-z]{0,5}\n|[a-z]{1,5}\n){0,10}") {
        let html = render(&text);
        prop_assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
        prop_assert_eq!(html.matches("<li>").count(), html.matches("</li>").count());
    }

    /// Rendering the same text twice yields the same fragment
    #[test]
    fn prop_render_is_deterministic(text in arb_markdownish()) {
        prop_assert_eq!(render(&text), render(&text));
    }
}
