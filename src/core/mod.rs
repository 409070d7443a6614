/*!
# Core Module

Core functionality for bom-fix: error taxonomy and BOM-aware
filesystem helpers.
*/

pub mod errors;
pub mod fs_utils;

pub use errors::{ErrorKind, NormalizeError, NormalizeResult};
pub use fs_utils::{
    decode_utf8_sig, read_text_strip_bom, utf8_bom_len, write_text_atomic, write_text_in_place,
    DecodedText, UTF8_BOM,
};
