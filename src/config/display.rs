//! Rendering configuration for size columns.

/// Decimal places used for human-readable sizes.
///
/// Directory lines and the grand total line share this value.
pub const DEFAULT_DIGITS: u32 = 1;

/// Options controlling how byte counts are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Render with binary unit suffixes (K, M, G, T, P) instead of raw bytes
    pub human: bool,

    /// Decimal places kept when `human` is set
    pub digits: u32,
}

impl DisplayOptions {
    /// Raw byte counts, or human-readable sizes with [`DEFAULT_DIGITS`] places.
    #[must_use]
    pub const fn new(human: bool) -> Self {
        Self {
            human,
            digits: DEFAULT_DIGITS,
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::new(false)
    }
}
