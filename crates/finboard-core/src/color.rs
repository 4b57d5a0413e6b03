// File: crates/finboard-core/src/color.rs
// Summary: Deterministic placeholder colors (seed-hashed avatar hues) and HSL helpers.

/// Two-stop gradient hues derived from a seed string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HuePair {
    pub a: u16,
    pub b: u16,
}

/// `h = h*31 + unit (mod 2^32)` over the UTF-16 code units of `seed`.
pub fn seed_hash(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as u32))
}

/// Hues for an avatar gradient. Same seed, same pair; collisions are allowed.
pub fn avatar_hues(seed: &str) -> HuePair {
    let h = seed_hash(seed);
    HuePair {
        a: (h % 360) as u16,
        b: ((h as u64 * 7) % 360) as u16,
    }
}

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let v = u32::from_str_radix(hex, 16).ok()?;
        Some(Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// HSL (hue in degrees, saturation/lightness in [0, 1]) to RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_u8(r1), to_u8(g1), to_u8(b1))
}

/// Gradient stop colors for an avatar seed: `hsl(a, 75%, 65%)` to `hsl(b, 75%, 55%)`.
pub fn avatar_gradient(seed: &str) -> (Rgb, Rgb) {
    let hues = avatar_hues(seed);
    (hsl_to_rgb(hues.a as f64, 0.75, 0.65), hsl_to_rgb(hues.b as f64, 0.75, 0.55))
}
