/*!
# Configuration Management

Target list and write mode, supplied by the caller or loaded from a
targets file.
*/

pub mod targets;

pub use targets::{TargetList, TargetsFile, WriteMode, DEFAULT_TARGETS};
