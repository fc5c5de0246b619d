use eframe::egui::Color32;
use crate::constants::*;
use crate::store::ChannelStore;

/// Channel intensities scaled to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

pub fn compose(red: f64, green: f64, blue: f64) -> NormalizedColor {
    NormalizedColor {
        red: normalize(red),
        green: normalize(green),
        blue: normalize(blue),
    }
}

pub fn compose_store(store: &ChannelStore) -> NormalizedColor {
    let (r, g, b) = store.rgb();
    compose(r, g, b)
}

#[inline(always)]
fn normalize(value: f64) -> f32 {
    (value / CHANNEL_MAX).clamp(0.0, 1.0) as f32
}

impl NormalizedColor {
    pub fn to_rgb8(self) -> [u8; 3] {
        let scale = |c: f32| (c * CHANNEL_MAX as f32).round() as u8;
        [scale(self.red), scale(self.green), scale(self.blue)]
    }

    pub fn to_color32(self) -> Color32 {
        let [r, g, b] = self.to_rgb8();
        Color32::from_rgb(r, g, b)
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn divides_each_channel_by_255() {
        let color = compose(255.0, 0.0, 51.0);
        assert_eq!(color, NormalizedColor { red: 1.0, green: 0.0, blue: 0.2 });
    }

    #[test]
    fn components_stay_in_unit_range() {
        for v in [0.0, 0.5, 1.0, 87.0, 128.3, 254.9, 255.0] {
            let c = compose(v, v, v);
            assert!((0.0..=1.0).contains(&c.red));
            assert!((c.red - (v / 255.0) as f32).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn hex_and_color32_use_rounded_bytes() {
        let color = compose(255.0, 128.4, 0.0);
        assert_eq!(color.to_hex(), "#FF8000");
        assert_eq!(color.to_color32(), Color32::from_rgb(255, 128, 0));
    }
}
