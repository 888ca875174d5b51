use std::io::{BufRead, Write};

use alphapack::{
    EncodedRecord,
    Padding,
    TokenEncoderOptions,
    Tokenizer,
    VocabGrowth,
    encoders::DEFAULT_MAX_LENGTH,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_args::VocabArgs,
};

/// Output rendering for encoded records.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RecordFormat {
    /// Space-separated ids, one record per line.
    Plain,

    /// One `{"input_ids": [..], "attention_mask": [..]}` object per line.
    Json,
}

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Record length cap.
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Padding mode: `max_length` or `none`.
    #[arg(long, default_value = "max_length")]
    padding: Padding,

    /// Prepend `<BOS>`.
    #[arg(long)]
    add_bos: bool,

    /// Append `<EOS>`.
    #[arg(long)]
    add_eos: bool,

    /// Do not grow the vocabulary; unseen words become `<UNK>`.
    #[arg(long)]
    frozen: bool,

    /// Do not save the grown vocabulary.
    #[arg(long)]
    no_save: bool,

    /// Output format.
    #[arg(long, default_value = "plain")]
    format: RecordFormat,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let growth = if self.frozen {
            VocabGrowth::Frozen
        } else {
            VocabGrowth::Online
        };
        let tokenizer: Tokenizer<u32> = self
            .vocab
            .tokenizer_options()
            .with_encoder(
                TokenEncoderOptions::default()
                    .with_growth(growth)
                    .with_add_bos(self.add_bos)
                    .with_add_eos(self.add_eos),
            )
            .open_or_create()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let before = tokenizer.len();
        let mut line = String::new();
        let mut count = 0usize;
        while reader.read_line(&mut line)? > 0 {
            let record = tokenizer.encode(&line, self.max_length, self.padding)?;
            write_record(&mut writer, &record, self.format)?;
            line.clear();
            count += 1;
        }
        writer.flush()?;

        log::info!(
            "encoded {count} lines; vocabulary grew from {before} to {} of {}",
            tokenizer.len(),
            tokenizer.capacity()
        );

        if self.frozen || self.no_save {
            return Ok(());
        }
        tokenizer.save_vocab(&self.vocab.vocab)?;
        Ok(())
    }
}

fn write_record(
    writer: &mut dyn Write,
    record: &EncodedRecord<u32>,
    format: RecordFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        RecordFormat::Plain => {
            for (idx, id) in record.input_ids.iter().enumerate() {
                write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
            }
            writeln!(writer)?;
        }
        RecordFormat::Json => {
            let value = serde_json::json!({
                "input_ids": record.input_ids,
                "attention_mask": record.attention_mask,
            });
            serde_json::to_writer(&mut *writer, &value)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
