//! # Case Folding

/// Latin capital I with dot above; Turkish `İ`.
const DOTTED_CAPITAL_I: char = '\u{0130}';

/// Latin small dotless i; Turkish `ı`.
const DOTLESS_SMALL_I: char = '\u{0131}';

/// Case folding policy applied before segmentation.
///
/// Every mode keeps diacritics.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CaseFolding {
    /// Unicode lowercase, with `İ` folded to a plain `i`.
    ///
    /// Generic lowercasing maps `İ` to `i` followed by a combining dot
    /// above (U+0307); that pair never matches the `i` of the same word
    /// written in lowercase, so it is dropped.
    #[default]
    Unicode,

    /// Turkic lowercase: `I` folds to `ı` and `İ` folds to `i`.
    Turkic,

    /// No case change.
    Preserve,
}

impl CaseFolding {
    /// Fold `text`, appending to `buf`.
    pub fn fold_into(
        &self,
        text: &str,
        buf: &mut String,
    ) {
        match self {
            Self::Preserve => buf.push_str(text),
            Self::Unicode => {
                for c in text.chars() {
                    match c {
                        DOTTED_CAPITAL_I => buf.push('i'),
                        c => buf.extend(c.to_lowercase()),
                    }
                }
            }
            Self::Turkic => {
                for c in text.chars() {
                    match c {
                        DOTTED_CAPITAL_I => buf.push('i'),
                        'I' => buf.push(DOTLESS_SMALL_I),
                        c => buf.extend(c.to_lowercase()),
                    }
                }
            }
        }
    }

    /// Fold `text` into a new string.
    pub fn fold(
        &self,
        text: &str,
    ) -> String {
        let mut buf = String::with_capacity(text.len());
        self.fold_into(text, &mut buf);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_folding() {
        let f = CaseFolding::Unicode;
        assert_eq!(f.fold("Hello WORLD"), "hello world");
        assert_eq!(f.fold("İSTANBUL"), "istanbul");
        assert_eq!(f.fold("ılık"), "ılık");
        assert_eq!(f.fold("ÇAĞRI"), "çağri");
        assert_eq!(f.fold("СОФИЯ"), "софия");
        assert_eq!(f.fold("Café"), "café");
    }

    #[test]
    fn test_turkic_folding() {
        let f = CaseFolding::Turkic;
        assert_eq!(f.fold("ISPARTA"), "ısparta");
        assert_eq!(f.fold("İzmir"), "izmir");
        assert_eq!(f.fold("ÇAĞRI"), "çağrı");
    }

    #[test]
    fn test_preserve() {
        assert_eq!(CaseFolding::Preserve.fold("MiXeD"), "MiXeD");
    }

    #[test]
    fn test_parse() {
        assert_eq!("turkic".parse::<CaseFolding>().unwrap(), CaseFolding::Turkic);
        assert_eq!("Unicode".parse::<CaseFolding>().unwrap(), CaseFolding::Unicode);
        assert_eq!(CaseFolding::Preserve.to_string(), "preserve");
        assert!("klingon".parse::<CaseFolding>().is_err());
    }
}
