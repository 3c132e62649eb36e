//! Plain-text normalization for fragments cut out of HTML.
//!
//! The extractor hands over whatever sits between an open and a close tag,
//! which can still contain inline markup (`<b>`, `<a href=..>`) and entities
//! (`&nbsp;`, `&amp;`). Cleaning is deliberately crude: tags are dropped,
//! entities become a single space, and runs of spaces collapse. It is not
//! an HTML decoder.

/// Characters stripped from both ends before any other processing.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\x0C', '\x0B'];

/// Normalize a raw HTML fragment into display text.
///
/// Steps, in order:
/// 1. trim space, tab, newline, carriage return, form feed, vertical tab
/// 2. remove `<...>` spans front to back, stopping at the first `<` with no `>`
/// 3. replace every `&...;` span with one space (a lone `&` is kept)
/// 4. collapse runs of `' '` into one
///
/// ```text
/// "Hello &nbsp; <b>World</b>"  →  "Hello World"
/// "a < b"                      →  "a < b"
/// ```
pub fn clean_content(raw: &str) -> String {
    let trimmed = raw.trim_matches(TRIM_CHARS);
    let untagged = strip_tags(trimmed);
    let unescaped = blank_entities(&untagged);
    collapse_spaces(&unescaped)
}

fn strip_tags(text: &str) -> String {
    let mut out = text.to_string();
    while let Some(start) = out.find('<') {
        let Some(rel_end) = out[start..].find('>') else {
            break;
        };
        out.replace_range(start..start + rel_end + 1, "");
    }
    out
}

fn blank_entities(text: &str) -> String {
    let mut out = text.to_string();
    let mut from = 0;
    while let Some(rel) = out[from..].find('&') {
        let amp = from + rel;
        if let Some(rel_semi) = out[amp..].find(';') {
            out.replace_range(amp..amp + rel_semi + 1, " ");
        }
        from = amp + 1;
    }
    out
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nested_markup_and_entities() {
        assert_eq!(clean_content("Hello &nbsp; <b>World</b>"), "Hello World");
    }

    #[test]
    fn inline_tags_removed() {
        assert_eq!(clean_content("Some <i>text</i> here."), "Some text here.");
    }

    #[test]
    fn trims_control_whitespace() {
        assert_eq!(clean_content("\n\t\x0B\x0C Title \r\n"), "Title");
    }

    #[test]
    fn all_whitespace_becomes_empty() {
        assert_eq!(clean_content(" \n\t "), "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean_content(""), "");
    }

    #[test]
    fn unterminated_tag_left_in_place() {
        assert_eq!(clean_content("<b>bold</b> and <broken"), "bold and <broken");
    }

    #[test]
    fn tag_removal_stops_at_first_unterminated_lt() {
        // Once a `<` has no closing `>`, nothing after it is touched.
        assert_eq!(clean_content("a < b"), "a < b");
    }

    #[test]
    fn tag_spanning_attributes() {
        assert_eq!(
            clean_content(r#"<a href="x.html" class="k">Link</a>"#),
            "Link"
        );
    }

    #[test]
    fn lone_ampersand_kept() {
        assert_eq!(clean_content("Fish & Chips"), "Fish & Chips");
    }

    #[test]
    fn entity_span_runs_to_next_semicolon() {
        // The span is `&` up to the next `;`, wherever that is.
        assert_eq!(clean_content("A & B; C"), "A C");
    }

    #[test]
    fn adjacent_entities() {
        assert_eq!(clean_content("x&amp;&lt;y"), "x y");
    }

    #[test]
    fn entity_without_semicolon_after_replaced_one() {
        assert_eq!(clean_content("&copy; 2024 & later"), " 2024 & later");
    }

    #[test]
    fn only_spaces_collapse() {
        assert_eq!(clean_content("a    b\n\n\nc"), "a b\n\n\nc");
    }

    #[test]
    fn trim_happens_before_tag_removal() {
        assert_eq!(clean_content("<span> x </span>"), " x ");
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            clean_content("Índice &mdash; <em>años</em>"),
            "Índice años"
        );
    }
}
