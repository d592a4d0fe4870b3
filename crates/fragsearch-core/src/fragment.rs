//! Text-fragment deep links (`#:~:text=`).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters JavaScript's `encodeURI` escapes.
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// `encodeURI` plus the characters a text directive treats as syntax.
const TEXT_DIRECTIVE: &AsciiSet = &ENCODE_URI.add(b',').add(b'-').add(b'&').add(b'#');

/// Build a link to `url` that scrolls to and highlights `matched_text`.
///
/// `trailing_word`, when non-empty, is appended as the `,-suffix` context
/// that picks the right occurrence of repeated text. The result is fully
/// percent-encoded and safe inside an `href` attribute.
pub fn text_fragment_url(url: &str, matched_text: &str, trailing_word: &str) -> String {
    let mut link: String = utf8_percent_encode(url, ENCODE_URI).collect();

    // an existing fragment keeps its anchor; the directive follows it
    link.push_str(if url.contains('#') { ":~:text=" } else { "#:~:text=" });
    link.extend(utf8_percent_encode(matched_text, TEXT_DIRECTIVE));

    if !trailing_word.is_empty() {
        link.push_str(",-");
        link.extend(utf8_percent_encode(trailing_word, TEXT_DIRECTIVE));
    }

    link
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_without_suffix() {
        assert_eq!(
            text_fragment_url("/docs/", "quick", ""),
            "/docs/#:~:text=quick"
        );
    }

    #[test]
    fn test_fragment_with_suffix() {
        assert_eq!(
            text_fragment_url("/docs/", "install", "ation"),
            "/docs/#:~:text=install,-ation"
        );
    }

    #[test]
    fn test_fragment_encodes_spaces_and_unicode() {
        assert_eq!(
            text_fragment_url("/my page/", "Grüße aus Köln", ""),
            "/my%20page/#:~:text=Gr%C3%BC%C3%9Fe%20aus%20K%C3%B6ln"
        );
    }

    #[test]
    fn test_fragment_escapes_directive_syntax_in_text() {
        assert_eq!(
            text_fragment_url("/faq/", "yes, re-run & retry", "now-ish"),
            "/faq/#:~:text=yes%2C%20re%2Drun%20%26%20retry,-now%2Dish"
        );
    }

    #[test]
    fn test_fragment_keeps_encode_uri_reserved_chars_in_url() {
        assert_eq!(
            text_fragment_url("https://example.com/a?b=c&d=e", "abc", ""),
            "https://example.com/a?b=c&d=e#:~:text=abc"
        );
    }

    #[test]
    fn test_fragment_after_existing_anchor() {
        assert_eq!(
            text_fragment_url("/guide/#setup", "cargo", ""),
            "/guide/#setup:~:text=cargo"
        );
    }

    #[test]
    fn test_fragment_escapes_quotes() {
        let link = text_fragment_url("/q/", r#"say "hi""#, "");
        assert!(!link.contains('"'));
        assert!(link.ends_with("say%20%22hi%22"));
    }
}
