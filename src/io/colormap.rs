//! Colormaps for shading walks by visit order

use clap::ValueEnum;

/// Viridis anchor colors at 0, 0.25, 0.5, 0.75 and 1
const VIRIDIS_STOPS: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

/// Named colormap mapping `[0, 1]` to opaque RGBA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Colormap {
    /// Blue through cyan, yellow and red
    #[default]
    Jet,
    /// Perceptually uniform purple to yellow
    Viridis,
    /// Black to white
    Gray,
}

impl Colormap {
    /// Color at position `t`, clamped to `[0, 1]`
    pub fn color_at(self, t: f64) -> [u8; 4] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::Jet => {
                let channel = |center: f64| to_byte(1.5 - 4.0f64.mul_add(t, -center).abs());
                [channel(3.0), channel(2.0), channel(1.0), 255]
            }
            Self::Viridis => {
                let scaled = t * (VIRIDIS_STOPS.len() - 1) as f64;
                let lower = (scaled.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
                let fraction = scaled - lower as f64;
                let from = VIRIDIS_STOPS.get(lower).copied().unwrap_or([0, 0, 0]);
                let to = VIRIDIS_STOPS.get(lower + 1).copied().unwrap_or(from);
                let mix = |a: u8, b: u8| {
                    (f64::from(b) - f64::from(a)).mul_add(fraction, f64::from(a)).round() as u8
                };
                [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2]), 255]
            }
            Self::Gray => {
                let level = (t * 255.0).round() as u8;
                [level, level, level, 255]
            }
        }
    }

    /// Color of the `order`-th visited position in a walk of `length` positions
    ///
    /// Order 1 maps to the low end of the colormap and `length` to the high end.
    pub fn color_for_order(self, order: u32, length: usize) -> [u8; 4] {
        if length <= 1 {
            return self.color_at(1.0);
        }
        let t = f64::from(order.saturating_sub(1)) / (length - 1) as f64;
        self.color_at(t)
    }
}

fn to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
