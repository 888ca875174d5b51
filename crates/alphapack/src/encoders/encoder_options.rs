//! Token Encoder Options
//!
//! Options for building a [`WordEncoder`](crate::encoders::WordEncoder).

/// The default `max_length` for encoding.
pub const DEFAULT_MAX_LENGTH: usize = 512;

/// Padding mode.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Padding {
    /// Right-pad with `PAD` up to `max_length`.
    #[default]
    MaxLength,

    /// No padding; the record is as long as the (truncated) token stream.
    None,
}

/// Vocabulary growth policy during encoding.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VocabGrowth {
    /// Register unseen tokens while there is room.
    #[default]
    Online,

    /// Never modify the vocabulary; unseen tokens map to `UNK`.
    Frozen,
}

/// Options for configuring a [`WordEncoder`](crate::encoders::WordEncoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenEncoderOptions {
    /// The vocabulary growth policy.
    pub growth: VocabGrowth,

    /// Prepend `BOS`.
    pub add_bos: bool,

    /// Append `EOS`.
    ///
    /// Framing happens before truncation, so a full-length
    /// record loses its trailing `EOS`.
    pub add_eos: bool,
}

impl TokenEncoderOptions {
    /// Get the configured [`VocabGrowth`].
    pub fn growth(&self) -> VocabGrowth {
        self.growth
    }

    /// Set the configured [`VocabGrowth`].
    pub fn set_growth(
        &mut self,
        growth: VocabGrowth,
    ) {
        self.growth = growth;
    }

    /// Set the configured [`VocabGrowth`] and return the options.
    pub fn with_growth(
        mut self,
        growth: VocabGrowth,
    ) -> Self {
        self.set_growth(growth);
        self
    }

    /// Is `BOS` prepended?
    pub fn add_bos(&self) -> bool {
        self.add_bos
    }

    /// Set whether `BOS` is prepended.
    pub fn set_add_bos(
        &mut self,
        add_bos: bool,
    ) {
        self.add_bos = add_bos;
    }

    /// Set whether `BOS` is prepended and return the options.
    pub fn with_add_bos(
        mut self,
        add_bos: bool,
    ) -> Self {
        self.set_add_bos(add_bos);
        self
    }

    /// Is `EOS` appended?
    pub fn add_eos(&self) -> bool {
        self.add_eos
    }

    /// Set whether `EOS` is appended.
    pub fn set_add_eos(
        &mut self,
        add_eos: bool,
    ) {
        self.add_eos = add_eos;
    }

    /// Set whether `EOS` is appended and return the options.
    pub fn with_add_eos(
        mut self,
        add_eos: bool,
    ) -> Self {
        self.set_add_eos(add_eos);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TokenEncoderOptions::default();
        assert_eq!(options.growth(), VocabGrowth::Online);
        assert!(!options.add_bos());
        assert!(!options.add_eos());
        assert_eq!(Padding::default(), Padding::MaxLength);
    }

    #[test]
    fn test_builders() {
        let options = TokenEncoderOptions::default()
            .with_growth(VocabGrowth::Frozen)
            .with_add_bos(true)
            .with_add_eos(true);
        assert_eq!(options.growth(), VocabGrowth::Frozen);
        assert!(options.add_bos());
        assert!(options.add_eos());
    }

    #[test]
    fn test_parse() {
        assert_eq!("max_length".parse::<Padding>().unwrap(), Padding::MaxLength);
        assert_eq!("none".parse::<Padding>().unwrap(), Padding::None);
        assert_eq!(Padding::MaxLength.to_string(), "max_length");
        assert_eq!("frozen".parse::<VocabGrowth>().unwrap(), VocabGrowth::Frozen);
        assert!("longest".parse::<Padding>().is_err());
    }
}
