use std::io::Write;

use alphapack::{
    WordVocab,
    vocab::io::{VocabFormat, load_vocab_path},
};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Vocabulary file.
    #[arg(long)]
    vocab: String,

    /// Also list the `id token` entries.
    #[arg(long)]
    tokens: bool,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab: WordVocab<u32> = load_vocab_path(&self.vocab)?;
        let mut writer = self.output.open_writer()?;

        writeln!(writer, "path: {}", self.vocab)?;
        writeln!(writer, "format: {}", VocabFormat::from_path(&self.vocab))?;
        writeln!(writer, "capacity: {}", vocab.capacity())?;
        writeln!(writer, "size: {}", vocab.len())?;
        writeln!(writer, "remaining: {}", vocab.remaining())?;

        if self.tokens {
            for (id, token) in vocab.iter() {
                writeln!(writer, "{id}\t{token}")?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
