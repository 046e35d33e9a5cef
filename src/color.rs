/// A four-channel color with each channel normalized to [0, 1].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {

    pub const WHITE: Color      = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color      = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color        = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color      = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color       = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Color     = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const TEAL: Color       = Color::new(0.0, 1.0, 1.0, 1.0);
    pub const PINK: Color       = Color::new(1.0, 0.0, 1.0, 1.0);
    pub const GRAY: Color       = Color::new(0.5, 0.5, 0.5, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Normalizes 16-bit channels by their maximum representable value,
    /// clamped to [0, 1].
    pub fn from_rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        const MAX: f32 = u16::MAX as f32;
        Self::new(
            (r as f32 / MAX).clamp(0.0, 1.0),
            (g as f32 / MAX).clamp(0.0, 1.0),
            (b as f32 / MAX).clamp(0.0, 1.0),
            (a as f32 / MAX).clamp(0.0, 1.0),
        )
    }

    /// Normalizes 8-bit channels by their maximum representable value.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        const MAX: f32 = u8::MAX as f32;
        Self::new(
            r as f32 / MAX,
            g as f32 / MAX,
            b as f32 / MAX,
            a as f32 / MAX,
        )
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn full_intensity_red_normalizes_exactly() {
        let color = Color::from_rgba16(u16::MAX, 0, 0, u16::MAX);
        assert_eq!(color, Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn channels_divide_by_their_maximum() {
        let color = Color::from_rgba16(0, 32768, 0, 65535);
        assert_eq!(color.g, 32768.0 / 65535.0);
        let color = Color::from_rgba8(128, 0, 255, 255);
        assert_eq!(color.r, 128.0 / 255.0);
        assert_eq!(color.b, 1.0);
    }

    #[test]
    fn normalized_channels_stay_in_range() {
        for value in [0u16, 1, 255, 256, 32767, 65534, 65535] {
            let color = Color::from_rgba16(value, value, value, value);
            for channel in [color.r, color.g, color.b, color.a] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
