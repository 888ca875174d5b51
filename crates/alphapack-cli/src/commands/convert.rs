use alphapack::{WordVocab, vocab::io::VocabFormat};

use crate::logging::LogArgs;

/// Args for the convert command.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Source vocabulary file.
    #[arg(long)]
    from: String,

    /// Destination vocabulary file.
    #[arg(long)]
    to: String,

    /// Source format: base64 or json; defaults to the `--from` extension.
    #[arg(long)]
    from_format: Option<VocabFormat>,

    /// Destination format: base64 or json; defaults to the `--to` extension.
    #[arg(long)]
    to_format: Option<VocabFormat>,

    #[clap(flatten)]
    logging: LogArgs,
}

impl ConvertArgs {
    /// Run the convert command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let from_format = self
            .from_format
            .unwrap_or_else(|| VocabFormat::from_path(&self.from));
        let to_format = self
            .to_format
            .unwrap_or_else(|| VocabFormat::from_path(&self.to));

        let vocab: WordVocab<u32> = from_format.load(&self.from)?;
        to_format.save(&vocab, &self.to)?;

        log::info!(
            "converted {} ({from_format}) to {} ({to_format}): {} tokens, capacity {}",
            self.from,
            self.to,
            vocab.len(),
            vocab.capacity()
        );
        Ok(())
    }
}
