/// How the video frame maps onto the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AspectMode {
    /// Letterbox so the whole frame stays visible.
    #[default]
    Fit,
    /// Crop the frame to fill the window.
    Fill,
}

impl AspectMode {
    /// The mode a toggle control should switch to next.
    pub fn cycled(self) -> Self {
        match self {
            AspectMode::Fit => AspectMode::Fill,
            AspectMode::Fill => AspectMode::Fit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectMode::Fit => "fit",
            AspectMode::Fill => "fill",
        }
    }
}

impl std::fmt::Display for AspectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
