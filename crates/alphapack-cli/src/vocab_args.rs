use alphapack::{
    CaseFolding,
    SegmentationConfig,
    TokenizerOptions,
    vocab::DEFAULT_CAPACITY,
};

/// Vocabulary selection arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Vocabulary file; `.json` selects the legacy JSON format.
    #[arg(long)]
    pub vocab: String,

    /// Capacity of a fresh vocabulary.
    ///
    /// Ignored when `--vocab` exists; the saved capacity wins.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub vocab_size: usize,

    /// Case folding: unicode, turkic or preserve.
    #[arg(long, default_value = "unicode")]
    pub case_folding: CaseFolding,
}

impl VocabArgs {
    /// Tokenizer options for this vocabulary.
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions::default()
            .with_vocab_size(self.vocab_size)
            .with_vocab_path(Some(&self.vocab))
            .with_segmentation(SegmentationConfig::from(self.case_folding))
    }
}
