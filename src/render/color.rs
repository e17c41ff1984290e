/// Plain 8-bit RGB triple, the unit every painter in this crate works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Hue, saturation and value, all in [0, 1]. Achromatic colors report hue 0.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let r = self.0 as f32 / 255.0;
        let g = self.1 as f32 / 255.0;
        let b = self.2 as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max > 0.0 { delta / max } else { 0.0 };
        if delta <= f32::EPSILON {
            return (0.0, s, v);
        }

        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (h / 6.0, s, v)
    }

    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(1.0) * 6.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb(to_8(r), to_8(g), to_8(b))
    }

    /// Brighten by `factor` percent (150 = 50% brighter). Overflowing value bleeds into
    /// saturation so pure colors wash towards white.
    pub fn lighter(self, factor: u32) -> Self {
        if factor == 0 {
            return self;
        }
        if factor < 100 {
            return self.darker(10_000 / factor);
        }
        let (h, mut s, mut v) = self.to_hsv();
        v = v * factor as f32 / 100.0;
        if v > 1.0 {
            s = (s - (v - 1.0)).max(0.0);
            v = 1.0;
        }
        Rgb::from_hsv(h, s, v)
    }

    /// Darken by `factor` percent (140 = value divided by 1.4).
    pub fn darker(self, factor: u32) -> Self {
        if factor == 0 {
            return self;
        }
        if factor < 100 {
            return self.lighter(10_000 / factor);
        }
        let (h, s, v) = self.to_hsv();
        Rgb::from_hsv(h, s, v * 100.0 / factor as f32)
    }

    /// Keep the hue, pin saturation to 0.2 and value to 0.5.
    pub fn desaturated(self) -> Self {
        let (h, _, _) = self.to_hsv();
        Rgb::from_hsv(h, 0.2, 0.5)
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
}

/// Ordered color stops over [0, 1]; sampling outside the stops pads with the end colors.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { stops }
    }

    pub fn two_stop(from: Rgb, to: Rgb) -> Self {
        Self::new(vec![
            GradientStop { offset: 0.0, color: from },
            GradientStop { offset: 1.0, color: to },
        ])
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn map(&self, f: impl Fn(Rgb) -> Rgb) -> Self {
        Self {
            stops: self
                .stops
                .iter()
                .map(|s| GradientStop { offset: s.offset, color: f(s.color) })
                .collect(),
        }
    }

    pub fn at(&self, t: f32) -> Rgb {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgb::WHITE;
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        last.color
    }

    /// Sample for a coordinate `pos` on a gradient line running from `start` to `end`.
    pub fn along(&self, pos: f32, start: f32, end: f32) -> Rgb {
        let span = end - start;
        if span.abs() <= f32::EPSILON {
            return self.at(0.0);
        }
        self.at((pos - start) / span)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: (f32, f32),
    pub radius: f32,
    pub ramp: LinearGradient,
}

impl RadialGradient {
    pub fn at(&self, x: f32, y: f32) -> Rgb {
        if self.radius <= f32::EPSILON {
            return self.ramp.at(1.0);
        }
        let dx = x - self.center.0;
        let dy = y - self.center.1;
        self.ramp.at((dx * dx + dy * dy).sqrt() / self.radius)
    }
}
