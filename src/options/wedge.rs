use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Valid range for [`WedgeOptions::size_factor`].
pub const SIZE_FACTOR_RANGE: (f32, f32) = (0.0, 10.0);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Direction-indicator wedge options.
pub struct WedgeOptions {
    /// Uniform scale applied to the depth/width/height of every emitted
    /// indicator.
    pub size_factor: f32,
}

impl Default for WedgeOptions {
    fn default() -> Self {
        Self { size_factor: 0.2 }
    }
}

impl WedgeOptions {
    /// All values clamped into their valid ranges.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        let (lo, hi) = SIZE_FACTOR_RANGE;
        self.size_factor = self.size_factor.clamp(lo, hi);
        self
    }
}
