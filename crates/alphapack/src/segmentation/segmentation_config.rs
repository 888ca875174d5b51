//! # Text Segmentation Configuration
use crate::segmentation::CaseFolding;

/// Word + Punctuation Segmentor Configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationConfig {
    /// Case folding applied before splitting.
    pub case_folding: CaseFolding,
}

impl From<CaseFolding> for SegmentationConfig {
    fn from(case_folding: CaseFolding) -> Self {
        Self { case_folding }
    }
}

impl SegmentationConfig {
    /// Get the case folding mode.
    pub fn case_folding(&self) -> CaseFolding {
        self.case_folding
    }

    /// Set the case folding mode.
    pub fn set_case_folding(
        &mut self,
        case_folding: CaseFolding,
    ) {
        self.case_folding = case_folding;
    }

    /// Set the case folding mode and return the config.
    pub fn with_case_folding(
        mut self,
        case_folding: CaseFolding,
    ) -> Self {
        self.set_case_folding(case_folding);
        self
    }
}
