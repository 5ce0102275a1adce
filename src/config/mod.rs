//! Configuration for walking and rendering.
//!
//! All options are plain values built by the command-line layer and passed
//! explicitly to the walk and format routines; nothing is stored globally.

pub mod display;
pub mod scan;

pub use display::{DEFAULT_DIGITS, DisplayOptions};
pub use scan::ScanOptions;
