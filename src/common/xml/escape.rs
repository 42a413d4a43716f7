use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'", "\r"])
        .expect("Failed to build XML escaper")
});

// A raw CR would be normalized to LF by any XML parser.
const ENTITIES: [&str; 6] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;", "&#xD;"];

/// Characters that XML 1.0 does not allow in documents at all.
#[inline]
fn is_forbidden(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Escape XML special characters.
///
/// Control characters that XML 1.0 forbids are dropped. Tab and line feed
/// pass through; carriage return is written as `&#xD;` so it survives
/// end-of-line normalization.
///
/// # Examples
///
/// ```
/// use lessonkit::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell");
/// assert_eq!(escape_xml("a\rb"), "a&#xD;b");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    if s.chars().any(is_forbidden) {
        let cleaned: String = s.chars().filter(|c| !is_forbidden(*c)).collect();
        XML_ESCAPER.replace_all(&cleaned, &ENTITIES)
    } else {
        XML_ESCAPER.replace_all(s, &ENTITIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_passes_unicode() {
        assert_eq!(escape_xml("∴ a = 140 ✓ 🎯"), "∴ a = 140 ✓ 🎯");
        assert_eq!(escape_xml("m₁ = m₂, c₁ ≠ c₂"), "m₁ = m₂, c₁ ≠ c₂");
    }

    #[test]
    fn test_escape_quotes_and_ampersands() {
        assert_eq!(
            escape_xml(r#"Write "Let x = …" & 'y'"#),
            "Write &quot;Let x = …&quot; &amp; &apos;y&apos;"
        );
    }

    #[test]
    fn test_escape_keeps_whitespace_controls() {
        assert_eq!(escape_xml("a\tb\r\nc\u{0}"), "a\tb&#xD;\nc");
        assert_eq!(escape_xml("a\rb end\r"), "a&#xD;b end&#xD;");
    }
}
