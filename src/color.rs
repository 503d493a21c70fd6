use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 150.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.45, 0.6);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Continuous colour scales
// ---------------------------------------------------------------------------

/// Piecewise-linear colour scale, interpolated in linear RGB.
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<LinSrgb>,
}

impl ColorScale {
    fn from_rgb8(stops: &[(u8, u8, u8)]) -> Self {
        let stops = stops
            .iter()
            .map(|&(r, g, b)| Srgb::new(r, g, b).into_format::<f32>().into_linear())
            .collect();
        ColorScale { stops }
    }

    /// Diverging blue → grey → red.
    pub fn coolwarm() -> Self {
        Self::from_rgb8(&[(59, 76, 192), (221, 221, 221), (180, 4, 38)])
    }

    /// Sequential dark → teal → mint, for densities.
    pub fn mako() -> Self {
        Self::from_rgb8(&[
            (11, 4, 5),
            (56, 42, 84),
            (57, 93, 156),
            (52, 151, 169),
            (96, 206, 172),
            (222, 245, 229),
        ])
    }

    /// Same colours, opposite direction.
    pub fn reversed(mut self) -> Self {
        self.stops.reverse();
        self
    }

    /// Colour at `t ∈ [0, 1]`.
    pub fn at(&self, t: f64) -> Color32 {
        let Some(last) = self.stops.len().checked_sub(1) else {
            return Color32::GRAY;
        };
        if last == 0 {
            return to_color32(Srgb::from_linear(self.stops[0]));
        }
        let pos = t.clamp(0.0, 1.0) as f32 * last as f32;
        let i = (pos.floor() as usize).min(last - 1);
        let mixed = self.stops[i].mix(self.stops[i + 1], pos - i as f32);
        to_color32(Srgb::from_linear(mixed))
    }

    /// `n` colours evenly spread over the scale.
    pub fn sample(&self, n: usize) -> Vec<Color32> {
        match n {
            0 => Vec::new(),
            1 => vec![self.at(0.5)],
            _ => (0..n).map(|i| self.at(i as f64 / (n - 1) as f64)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_distinct() {
        let p = generate_palette(2);
        assert_eq!(p.len(), 2);
        assert_ne!(p[0], p[1]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_scale_endpoints() {
        let cw = ColorScale::coolwarm();
        assert_eq!(cw.at(0.0), Color32::from_rgb(59, 76, 192));
        assert_eq!(cw.at(1.0), Color32::from_rgb(180, 4, 38));
        assert_eq!(cw.at(2.0), cw.at(1.0));

        let rev = ColorScale::coolwarm().reversed();
        assert_eq!(rev.at(0.0), Color32::from_rgb(180, 4, 38));
    }

    #[test]
    fn test_sample_counts() {
        let mako = ColorScale::mako();
        assert_eq!(mako.sample(3).len(), 3);
        assert_eq!(mako.sample(3)[0], mako.at(0.0));
    }
}
