use glam::Vec2;

// Anything that is not explicitly percent resolves with pixel semantics, so
// a malformed or defaulted unit can never break a layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitType {
    #[default]
    Pixel,
    Percent,
    Unitless,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: UnitType,
}

impl Length {
    pub const fn new(value: f32, unit: UnitType) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, UnitType::Pixel)
    }

    pub const fn percent(value: f32) -> Self {
        Self::new(value, UnitType::Percent)
    }

    pub const fn zero() -> Self {
        Self::px(0.0)
    }

    pub fn resolve(self, reference: f32) -> f32 {
        match self.unit {
            UnitType::Percent => {
                // Degenerate references resolve to zero, never NaN geometry.
                if reference.is_finite() && reference > 0.0 {
                    self.value / 100.0 * reference
                } else {
                    0.0
                }
            }
            UnitType::Pixel | UnitType::Unitless => self.value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Length2 {
    pub x: Length,
    pub y: Length,
}

impl Length2 {
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    pub const fn px(x: f32, y: f32) -> Self {
        Self::new(Length::px(x), Length::px(y))
    }

    pub const fn percent(x: f32, y: f32) -> Self {
        Self::new(Length::percent(x), Length::percent(y))
    }

    pub const fn zero() -> Self {
        Self::px(0.0, 0.0)
    }

    pub fn resolve(self, reference: Vec2) -> Vec2 {
        Vec2::new(self.x.resolve(reference.x), self.y.resolve(reference.y))
    }
}

#[cfg(test)]
mod tests {
    use super::{Length, Length2, UnitType};
    use glam::Vec2;

    #[test]
    fn pixel_resolves_unchanged() {
        assert_eq!(Length::px(42.5).resolve(1000.0), 42.5);
        assert_eq!(Length::px(-8.0).resolve(0.0), -8.0);
    }

    #[test]
    fn percent_resolves_against_reference() {
        assert_eq!(Length::percent(50.0).resolve(200.0), 100.0);
        assert_eq!(Length::percent(12.5).resolve(64.0), 8.0);
    }

    #[test]
    fn percent_with_degenerate_reference_resolves_to_zero() {
        assert_eq!(Length::percent(50.0).resolve(0.0), 0.0);
        assert_eq!(Length::percent(50.0).resolve(-10.0), 0.0);
        assert_eq!(Length::percent(50.0).resolve(f32::NAN), 0.0);
        assert_eq!(Length::percent(50.0).resolve(f32::INFINITY), 0.0);
    }

    #[test]
    fn unitless_degrades_to_pixel_semantics() {
        let raw = Length::new(17.0, UnitType::Unitless);
        assert_eq!(raw.resolve(500.0), 17.0);
    }

    #[test]
    fn length2_resolves_axes_independently() {
        let raw = Length2::new(Length::percent(25.0), Length::px(12.0));
        assert_eq!(
            raw.resolve(Vec2::new(400.0, 300.0)),
            Vec2::new(100.0, 12.0)
        );
    }
}
