//! # Text Segmentation
//!
//! [`SegmentationConfig`] describes the declarative needs of segmentation:
//! * `case_folding` - the [`CaseFolding`] applied before splitting.
//!
//! [`TextSegmentor`] splits text on whitespace, then peels punctuation
//! and symbol characters off the edges of each unit as single-character
//! tokens. The same rules apply to every script.

pub mod case_folding;
pub mod segmentation_config;
pub mod text_segmentor;

#[doc(inline)]
pub use case_folding::CaseFolding;
#[doc(inline)]
pub use segmentation_config::SegmentationConfig;
#[doc(inline)]
pub use text_segmentor::{TOKEN_SEPARATOR, TextSegmentor, is_punctuation};
