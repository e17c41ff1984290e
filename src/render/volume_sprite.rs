use crate::data::gradient_config::GradientConfig;
use crate::render::color::{LinearGradient, Rgb};
use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Layout of the volume widget in cells. The track is where value maps to position; the
/// overshoot margins pad it into the drag hit-rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SoundGeometry {
    pub padding_left: u16,
    pub track_length: u16,
    pub padding_right: u16,
    pub height: u16,
    pub overshoot_x: u16,
    pub overshoot_top: u16,
    pub overshoot_bottom: u16,
    /// Width of the percentage label region in the top-left corner.
    pub text_width: u16,
}

impl Default for SoundGeometry {
    fn default() -> Self {
        Self {
            padding_left: 1,
            track_length: 24,
            padding_right: 1,
            height: 3,
            overshoot_x: 4,
            overshoot_top: 1,
            overshoot_bottom: 1,
            text_width: 5,
        }
    }
}

impl SoundGeometry {
    pub fn width(&self) -> u16 {
        self.padding_left + self.track_length.max(1) + self.padding_right
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width(), self.height.max(1))
    }

    /// Rows of the wedge filled at track column `i`, counted from the bottom.
    pub fn filled_rows(&self, i: u16) -> u16 {
        let len = self.track_length.max(1) as u32;
        let h = self.height.max(1) as u32;
        ((h * (i as u32 + 1) + len - 1) / len).clamp(1, h) as u16
    }

    /// Whether sprite pixel (x, y) lies in the transparent track cutout.
    pub fn in_cutout(&self, x: u16, y: u16) -> bool {
        let h = self.height.max(1);
        if x < self.padding_left || x >= self.padding_left + self.track_length.max(1) || y >= h {
            return false;
        }
        let from_bottom = h - 1 - y;
        from_bottom < self.filled_rows(x - self.padding_left)
    }
}

/// The volume wedge rasterized once: a normal and a muted fill, both masked to the cutout.
#[derive(Debug, Clone)]
pub struct VolumeSprite {
    geometry: SoundGeometry,
    cutout: GrayImage,
    normal: RgbaImage,
    muted: RgbaImage,
}

impl VolumeSprite {
    pub fn new(geometry: SoundGeometry, colors: &GradientConfig) -> Self {
        let (w, h) = geometry.size();
        let cutout = GrayImage::from_fn(w as u32, h as u32, |x, y| {
            if geometry.in_cutout(x as u16, y as u16) {
                Luma([255])
            } else {
                Luma([0])
            }
        });
        let normal = rasterize(&geometry, &cutout, &colors.gradient());
        let muted = rasterize(&geometry, &cutout, &colors.muted_gradient());
        Self { geometry, cutout, normal, muted }
    }

    pub fn geometry(&self) -> &SoundGeometry {
        &self.geometry
    }

    pub fn in_cutout(&self, x: u32, y: u32) -> bool {
        x < self.cutout.width() && y < self.cutout.height() && self.cutout.get_pixel(x, y).0[0] > 0
    }

    fn fill(&self, muted: bool) -> &RgbaImage {
        if muted {
            &self.muted
        } else {
            &self.normal
        }
    }

    /// Opaque fill color at (x, y), `None` where the mask cuts it away.
    pub fn fill_pixel(&self, muted: bool, x: u32, y: u32) -> Option<Rgb> {
        let img = self.fill(muted);
        if x >= img.width() || y >= img.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        (a > 0).then_some(Rgb(r, g, b))
    }
}

fn rasterize(geometry: &SoundGeometry, cutout: &GrayImage, gradient: &LinearGradient) -> RgbaImage {
    let start = geometry.padding_left as f32;
    let end = start + geometry.track_length.max(1) as f32;
    RgbaImage::from_fn(cutout.width(), cutout.height(), |x, y| {
        if cutout.get_pixel(x, y).0[0] == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let c = gradient.along(x as f32 + 0.5, start, end);
        Rgba([c.0, c.1, c.2, 255])
    })
}
