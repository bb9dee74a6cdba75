/// A position within a media timeline as a fraction of its duration.
///
/// Construction clamps into `[0.0, 1.0]`, so a `Fraction` pulled out of a
/// snapshot is always safe to hand straight to a slider or progress bar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction(f32);

impl Fraction {
    /// The start of the timeline.
    pub const ZERO: Fraction = Fraction(0.0);
    /// The end of the timeline.
    pub const ONE: Fraction = Fraction(1.0);

    /// Create a new fraction, clamping between 0.0 and 1.0
    pub fn new(value: f32) -> Self {
        // NaN folds to the start of the range
        if value.is_nan() {
            return Fraction(0.0);
        }
        Fraction(value.clamp(0.0, 1.0))
    }

    /// Get the raw fraction (0.0 to 1.0)
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Whether the position sits at the very start of the timeline.
    pub fn is_start(&self) -> bool {
        self.0 <= 0.0
    }

    /// Whether the position sits at the very end of the timeline.
    pub fn is_end(&self) -> bool {
        self.0 >= 1.0
    }
}

impl From<f32> for Fraction {
    fn from(value: f32) -> Self {
        Fraction::new(value)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
