mod convert;
mod decode;
mod encode;
mod inspect;

/// Subcommands for alphapack
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text lines into token ids, growing the vocabulary.
    Encode(encode::EncodeArgs),

    /// Decode lines of token ids into text.
    Decode(decode::DecodeArgs),

    /// Describe a vocabulary file.
    Inspect(inspect::InspectArgs),

    /// Convert a vocabulary between file formats.
    Convert(convert::ConvertArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Convert(cmd) => cmd.run(),
        }
    }
}
