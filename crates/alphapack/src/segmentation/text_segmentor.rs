//! # Text Segmentor

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::segmentation::SegmentationConfig;

/// Separator used by [`TextSegmentor::join`].
pub const TOKEN_SEPARATOR: &str = " ";

/// Is `c` a punctuation or symbol character?
///
/// Covers the Unicode `P*` and `S*` general categories. Letters, digits,
/// marks and everything else are word characters.
pub fn is_punctuation(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}

/// Word + Punctuation Segmentor.
///
/// Splits text into case-folded word tokens and single-character
/// punctuation tokens peeled from the edges of whitespace-separated units.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextSegmentor {
    config: SegmentationConfig,
}

impl From<SegmentationConfig> for TextSegmentor {
    fn from(config: SegmentationConfig) -> Self {
        Self::from_config(config)
    }
}

impl TextSegmentor {
    /// Create a new text segmentor from the given configuration.
    pub fn from_config(config: SegmentationConfig) -> Self {
        Self { config }
    }

    /// Get the segmentation config.
    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Visit every token of `text`, in order.
    ///
    /// ## Arguments
    /// * `text` - the raw text to segment.
    /// * `f` - called once per token.
    ///
    /// ## Returns
    /// The number of tokens visited.
    pub fn for_each_token<F>(
        &self,
        text: &str,
        f: &mut F,
    ) -> usize
    where
        F: FnMut(&str),
    {
        let folded = self.config.case_folding.fold(text);

        let mut count = 0;
        for unit in folded.split_whitespace() {
            count += for_each_unit_token(unit, f);
        }
        count
    }

    /// Split text into tokens.
    ///
    /// ## Arguments
    /// * `text` - the raw text to segment.
    ///
    /// ## Returns
    /// The ordered tokens; empty for empty or all-whitespace input.
    pub fn segment(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        self.for_each_token(text, &mut |token| tokens.push(token.to_string()));
        tokens
    }

    /// Join tokens using the segmentation spacing convention.
    ///
    /// This is the lossy inverse of [`Self::segment`]: every token is
    /// separated by a single space, punctuation included.
    pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
        let mut buf = String::new();
        for (idx, token) in tokens.iter().enumerate() {
            if idx > 0 {
                buf.push_str(TOKEN_SEPARATOR);
            }
            buf.push_str(token.as_ref());
        }
        buf
    }
}

/// Peel edge punctuation off a single whitespace-free unit.
fn for_each_unit_token<F>(
    unit: &str,
    f: &mut F,
) -> usize
where
    F: FnMut(&str),
{
    let start = unit
        .char_indices()
        .find(|&(_, c)| !is_punctuation(c))
        .map(|(idx, _)| idx)
        .unwrap_or(unit.len());

    let end = unit[start..]
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_punctuation(c))
        .map(|(idx, c)| start + idx + c.len_utf8())
        .unwrap_or(start);

    let mut count = emit_chars(&unit[..start], f);
    let core = &unit[start..end];
    if !core.is_empty() {
        f(core);
        count += 1;
    }
    count + emit_chars(&unit[end..], f)
}

/// Emit every character of `s` as its own token.
fn emit_chars<F>(
    s: &str,
    f: &mut F,
) -> usize
where
    F: FnMut(&str),
{
    for (idx, c) in s.char_indices() {
        f(&s[idx..idx + c.len_utf8()]);
    }
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::CaseFolding;

    fn segment(text: &str) -> Vec<String> {
        TextSegmentor::default().segment(text)
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(segment("Hello world!"), vec!["hello", "world", "!"]);
    }

    #[test]
    fn test_empty() {
        assert!(segment("").is_empty());
        assert!(segment("  \t\n ").is_empty());
    }

    #[test]
    fn test_edge_punctuation() {
        assert_eq!(segment("(merhaba)"), vec!["(", "merhaba", ")"]);
        assert_eq!(segment("\"Wow!!\""), vec!["\"", "wow", "!", "!", "\""]);
        assert_eq!(segment("...?!"), vec![".", ".", ".", "?", "!"]);
        assert_eq!(segment("$100"), vec!["$", "100"]);
    }

    #[test]
    fn test_inner_punctuation_stays() {
        assert_eq!(segment("don't e-mail."), vec!["don't", "e-mail", "."]);
    }

    #[test]
    fn test_multilingual() {
        assert_eq!(
            segment("İstanbul'da ÇOK güzel, София е столица."),
            vec![
                "istanbul'da",
                "çok",
                "güzel",
                ",",
                "софия",
                "е",
                "столица",
                "."
            ]
        );
    }

    #[test]
    fn test_turkic_config() {
        let segmentor: TextSegmentor = SegmentationConfig::default()
            .with_case_folding(CaseFolding::Turkic)
            .into();
        assert_eq!(segmentor.segment("ISPARTA!"), vec!["ısparta", "!"]);
    }

    #[test]
    fn test_count() {
        let segmentor = TextSegmentor::default();
        let mut seen = Vec::new();
        let count = segmentor.for_each_token("a, b!", &mut |t| seen.push(t.to_string()));
        assert_eq!(count, 4);
        assert_eq!(seen, vec!["a", ",", "b", "!"]);
    }

    #[test]
    fn test_is_punctuation() {
        for c in ['.', ',', '!', '?', '«', '»', '—', '$', '+', '€', '_'] {
            assert!(is_punctuation(c), "{c:?}");
        }
        for c in ['a', 'ş', 'ı', 'ж', '7', ' '] {
            assert!(!is_punctuation(c), "{c:?}");
        }
    }

    #[test]
    fn test_join() {
        assert_eq!(TextSegmentor::join(&["hello", "world", "!"]), "hello world !");
        assert_eq!(TextSegmentor::join::<&str>(&[]), "");
    }

    proptest::proptest! {
        #[test]
        fn tokens_are_nonempty_and_unspaced(text in "\\PC{0,120}") {
            let tokens = segment(&text);
            for token in &tokens {
                proptest::prop_assert!(!token.is_empty());
                proptest::prop_assert!(!token.chars().any(char::is_whitespace));
            }
            if text.trim().is_empty() {
                proptest::prop_assert!(tokens.is_empty());
            }
        }
    }
}
