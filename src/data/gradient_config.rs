use crate::render::color::{GradientStop, LinearGradient, Rgb};

/// Stock volume colors: green, yellow-green, amber, red.
pub const DEFAULT_VOLUME_COLORS: &str = "153;210;153;20;210;20;255;199;15;245;39;29";

pub const VOLUME_STOP_OFFSETS: [f32; 4] = [0.0, 0.22, 0.5, 1.0];

const COMPONENTS: usize = VOLUME_STOP_OFFSETS.len() * 3;
const PAD_COMPONENT: u8 = 255;

/// Ordered color stops for the volume wedge, already validated and padded.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    pub stops: Vec<GradientStop>,
}

impl GradientConfig {
    /// Parse `r;g;b;r;g;b;...`. Missing components are 255, unreadable ones 0.
    pub fn from_color_list(raw: &str) -> Self {
        let mut comps: Vec<u8> = raw
            .split(';')
            .map(|s| s.trim().parse::<i64>().map(|v| v.clamp(0, 255) as u8).unwrap_or(0))
            .collect();
        if comps.len() < COMPONENTS {
            log::debug!("volume color list has {} components; padding with {PAD_COMPONENT}", comps.len());
            comps.resize(COMPONENTS, PAD_COMPONENT);
        }

        let stops = VOLUME_STOP_OFFSETS
            .iter()
            .enumerate()
            .map(|(i, &offset)| GradientStop {
                offset,
                color: Rgb(comps[i * 3], comps[i * 3 + 1], comps[i * 3 + 2]),
            })
            .collect();
        Self { stops }
    }

    pub fn gradient(&self) -> LinearGradient {
        LinearGradient::new(self.stops.clone())
    }

    /// Same stops with every color pulled to a grey of its own hue.
    pub fn muted_gradient(&self) -> LinearGradient {
        self.gradient().map(Rgb::desaturated)
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self::from_color_list(DEFAULT_VOLUME_COLORS)
    }
}
