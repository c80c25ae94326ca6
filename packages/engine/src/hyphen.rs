//! Hyphen marker strategies.
//!
//! A [`Hyphen`] decides what goes between syllable fragments when they are
//! joined back into output: a soft hyphen for browsers, a visible dash for
//! demonstration, a zero-width space, an HTML entity reference, or any
//! custom text.

use std::borrow::Cow;

/// Soft hyphen (U+00AD), invisible unless the renderer breaks the line.
pub const SOFT_HYPHEN: &str = "\u{00AD}";

/// Zero-width space (U+200B), a break opportunity without a visible dash.
pub const ZERO_WIDTH_SPACE: &str = "\u{200B}";

/// Marker placed at syllable boundaries when joining fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hyphen {
    /// Soft hyphen character; the default.
    Soft,
    /// Visible dash (`-`).
    Dash,
    /// Zero-width space character.
    ZeroWidthSpace,
    /// Arbitrary literal text.
    Text(String),
    /// HTML entity reference, e.g. `shy` for `&shy;`.
    Entity(String),
}

impl Default for Hyphen {
    fn default() -> Self {
        Hyphen::Soft
    }
}

impl Hyphen {
    /// Marker text used when joining into a plain string.
    ///
    /// Entity markers stay in their `&name;` reference form here; the
    /// consumer embeds the string into an HTML context.
    pub fn text_marker(&self) -> Cow<'_, str> {
        match self {
            Hyphen::Soft => Cow::Borrowed(SOFT_HYPHEN),
            Hyphen::Dash => Cow::Borrowed("-"),
            Hyphen::ZeroWidthSpace => Cow::Borrowed(ZERO_WIDTH_SPACE),
            Hyphen::Text(text) => Cow::Borrowed(text.as_str()),
            Hyphen::Entity(name) => Cow::Owned(format!("&{name};")),
        }
    }

    /// Marker text used when writing into a document tree.
    ///
    /// Text nodes hold characters, not entity references, so known entity
    /// names resolve to their codepoint. Unknown names fall back to the
    /// soft hyphen.
    pub fn tree_marker(&self) -> Cow<'_, str> {
        match self {
            Hyphen::Entity(name) => match name.as_str() {
                "shy" => Cow::Borrowed(SOFT_HYPHEN),
                "hyphen" | "dash" => Cow::Borrowed("\u{2010}"),
                "ZeroWidthSpace" => Cow::Borrowed(ZERO_WIDTH_SPACE),
                _ => {
                    tracing::warn!(entity = %name, "Unknown entity name, using soft hyphen in text nodes");
                    Cow::Borrowed(SOFT_HYPHEN)
                }
            },
            _ => self.text_marker(),
        }
    }

    /// Join fragments into a plain string.
    pub fn join_text(&self, fragments: &[String]) -> String {
        fragments.join(self.text_marker().as_ref())
    }

    /// Join fragments for a document tree text node.
    pub fn join_tree(&self, fragments: &[String]) -> String {
        fragments.join(self.tree_marker().as_ref())
    }

    /// Remove this marker from previously hyphenated text.
    pub fn strip(&self, text: &str) -> String {
        text.replace(self.text_marker().as_ref(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments() -> Vec<String> {
        vec!["hy".to_string(), "phen".to_string(), "ation".to_string()]
    }

    #[test]
    fn test_dash_join() {
        assert_eq!(Hyphen::Dash.join_text(&fragments()), "hy-phen-ation");
    }

    #[test]
    fn test_soft_is_default() {
        assert_eq!(Hyphen::default(), Hyphen::Soft);
        assert_eq!(
            Hyphen::Soft.join_text(&fragments()),
            "hy\u{AD}phen\u{AD}ation"
        );
    }

    #[test]
    fn test_entity_text_marker_keeps_reference_form() {
        let hyphen = Hyphen::Entity("shy".to_string());
        assert_eq!(hyphen.join_text(&fragments()), "hy&shy;phen&shy;ation");
    }

    #[test]
    fn test_entity_tree_marker_resolves_known_names() {
        assert_eq!(Hyphen::Entity("shy".to_string()).tree_marker(), SOFT_HYPHEN);
        assert_eq!(Hyphen::Entity("hyphen".to_string()).tree_marker(), "\u{2010}");
        assert_eq!(
            Hyphen::Entity("unknown".to_string()).tree_marker(),
            SOFT_HYPHEN
        );
    }

    #[test]
    fn test_custom_text_marker() {
        let hyphen = Hyphen::Text("·".to_string());
        assert_eq!(hyphen.join_text(&fragments()), "hy·phen·ation");
    }

    #[test]
    fn test_strip_round_trip() {
        let hyphen = Hyphen::Dash;
        let joined = hyphen.join_text(&fragments());
        assert_eq!(hyphen.strip(&joined), "hyphenation");
    }

    #[test]
    fn test_single_fragment_join_is_identity() {
        let single = vec!["cat".to_string()];
        assert_eq!(Hyphen::Dash.join_text(&single), "cat");
    }
}
