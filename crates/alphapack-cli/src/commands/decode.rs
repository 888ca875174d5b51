use std::io::{BufRead, Write};

use alphapack::{TokenDecoderOptions, TokenEncoderOptions, Tokenizer, VocabGrowth};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_args::VocabArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Keep special tokens in the output.
    #[arg(long)]
    keep_special: bool,

    /// Stop each line at the first `<EOS>`.
    #[arg(long)]
    stop_at_eos: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer: Tokenizer<u32> = self
            .vocab
            .tokenizer_options()
            .with_encoder(TokenEncoderOptions::default().with_growth(VocabGrowth::Frozen))
            .with_decoder(TokenDecoderOptions::default().with_stop_at_eos(self.stop_at_eos))
            .build()?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let ids = line?
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<u32>, _>>()?;

            let text = tokenizer.decode(&ids, !self.keep_special)?;
            writeln!(writer, "{text}")?;
        }
        writer.flush()?;
        Ok(())
    }
}
