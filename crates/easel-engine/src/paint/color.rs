use crate::error::SceneError;

/// Premultiplied RGBA color with `f32` channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns straight-alpha components `[r, g, b, a]`.
    #[inline]
    pub fn to_straight(self) -> [f32; 4] {
        if self.a <= 0.0 {
            return [0.0, 0.0, 0.0, 0.0];
        }
        [self.r / self.a, self.g / self.a, self.b / self.a, self.a]
    }

    /// Returns straight-alpha sRGB bytes `[r, g, b, a]`.
    pub fn to_srgb_u8(self) -> [u8; 4] {
        self.to_straight().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Scales every channel by `factor` (premultiplied colors fade uniformly).
    #[inline]
    pub fn with_opacity(self, factor: f32) -> Self {
        let k = factor.clamp(0.0, 1.0);
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    /// Source-over compositing of `self` on top of `dst`.
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        let k = 1.0 - self.a;
        Color {
            r: self.r + dst.r * k,
            g: self.g + dst.g * k,
            b: self.b + dst.b * k,
            a: self.a + dst.a * k,
        }
    }

    /// Parses a CSS-style color string.
    ///
    /// Accepted forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)` (channels `0..=255`, alpha `0..=1`)
    /// and a small set of named colors.
    pub fn parse(input: &str) -> Result<Self, SceneError> {
        let s = input.trim().to_ascii_lowercase();
        let parsed = if let Some(hex) = s.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = s.strip_prefix("rgba(").and_then(|b| b.strip_suffix(')')) {
            parse_functional(body, true)
        } else if let Some(body) = s.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
            parse_functional(body, false)
        } else {
            named(&s)
        };
        parsed.ok_or_else(|| SceneError::type_mismatch(format!("`{input}` is not a recognized color")))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_srgb_u8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        4 => Some(Color::from_srgb_u8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_functional(body: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let channel = |s: &str| -> Option<f32> {
        let v: f32 = s.parse().ok()?;
        v.is_finite().then(|| v.clamp(0.0, 255.0) / 255.0)
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        let a: f32 = parts[3].parse().ok()?;
        if !a.is_finite() {
            return None;
        }
        a
    } else {
        1.0
    };
    Some(Color::from_straight(r, g, b, a))
}

fn named(name: &str) -> Option<Color> {
    let rgb = match name {
        "transparent" => return Some(Color::transparent()),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        _ => return None,
    };
    Some(Color::from_srgb_u8(rgb.0, rgb.1, rgb.2, 255))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_forms() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#ff000080").unwrap().to_srgb_u8(), [255, 0, 0, 128]);
        assert_eq!(Color::parse("#0f08").unwrap().to_srgb_u8(), [0, 255, 0, 136]);
    }

    #[test]
    fn parse_functional_and_named() {
        assert_eq!(Color::parse("rgb(255, 0, 0)").unwrap(), Color::parse("red").unwrap());
        assert_eq!(Color::parse(" RGBA(0,0,255,0.5) ").unwrap().to_srgb_u8(), [0, 0, 255, 128]);
        assert_eq!(Color::parse("transparent").unwrap(), Color::transparent());
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "#ggg", "#12345", "rgb(1,2)", "rgba(1,2,3)", "chartreuse-ish", "rgb(a,b,c)"] {
            assert!(
                matches!(Color::parse(bad), Err(SceneError::TypeMismatch(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn over_opaque_source_replaces_destination() {
        let red = Color::parse("red").unwrap();
        assert_eq!(red.over(Color::BLACK), red);
    }

    #[test]
    fn straight_round_trip_keeps_hue_under_opacity() {
        let c = Color::from_srgb_u8(200, 100, 50, 255).with_opacity(0.5);
        assert_eq!(c.to_srgb_u8(), [200, 100, 50, 128]);
    }
}
