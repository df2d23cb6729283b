//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_round_trips_through_density() {
        let px = Dp(8.0).to_px(2.5);
        assert_eq!(px, 20.0);
        assert_eq!(Dp::from_px(px, 2.5), Dp(8.0));
    }
}
