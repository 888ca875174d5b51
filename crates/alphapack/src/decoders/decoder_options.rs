//! Token Decoder Options
//!
//! Options for building a [`WordDecoder`](crate::decoders::WordDecoder).

/// Options for configuring a [`WordDecoder`](crate::decoders::WordDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenDecoderOptions {
    /// Stop at the first `EOS` id.
    ///
    /// Ids after it are not resolved, so they cannot fail.
    pub stop_at_eos: bool,
}

impl TokenDecoderOptions {
    /// Does decoding stop at the first `EOS`?
    pub fn stop_at_eos(&self) -> bool {
        self.stop_at_eos
    }

    /// Set whether decoding stops at the first `EOS`.
    pub fn set_stop_at_eos(
        &mut self,
        stop_at_eos: bool,
    ) {
        self.stop_at_eos = stop_at_eos;
    }

    /// Set whether decoding stops at the first `EOS` and return the options.
    pub fn with_stop_at_eos(
        mut self,
        stop_at_eos: bool,
    ) -> Self {
        self.set_stop_at_eos(stop_at_eos);
        self
    }
}
