//! Size theming for emitted geometry.

use glam::Vec3;

/// Supplies a per-position size scalar for emitted indicators.
///
/// The generator looks up the size at each element's center position and
/// multiplies it by the configured size factor.
pub trait SizeTheme {
    /// Size scalar for a 3D position (positive).
    fn size(&self, position: Vec3) -> f32;
}

/// A theme returning the same size everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSizeTheme {
    /// The size returned for every position.
    pub value: f32,
}

impl Default for UniformSizeTheme {
    fn default() -> Self {
        Self { value: 1.0 }
    }
}

impl SizeTheme for UniformSizeTheme {
    fn size(&self, _position: Vec3) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_theme_ignores_position() {
        let theme = UniformSizeTheme { value: 2.5 };
        assert_eq!(theme.size(Vec3::ZERO), 2.5);
        assert_eq!(theme.size(Vec3::splat(100.0)), 2.5);
    }
}
