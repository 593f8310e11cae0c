//! Color Math
//!
//! Hex/RGB conversion and the contrast-adjusted accent ("logo") color
//! derived from a background's BT.709 luma.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

fn hex_color() -> &'static Regex {
    HEX_COLOR.get_or_init(|| {
        Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").expect("valid hex color pattern")
    })
}

/// Accent for white backgrounds
pub const LIGHT_ENDPOINT: Rgb = Rgb { r: 128, g: 0, b: 0 };
/// Accent for black backgrounds
pub const DARK_ENDPOINT: Rgb = Rgb { r: 240, g: 128, b: 128 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Half-up rounding (`-2.5 -> -2`, `2.5 -> 3`)
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Parse `#rrggbb` or `rrggbb`, case-insensitive. `None` on anything else.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let caps = hex_color().captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Two lowercase hex digits
pub fn component_to_hex(component: u8) -> String {
    format!("{:02x}", component)
}

pub fn rgb_to_hex(color: Rgb) -> String {
    format!(
        "#{}{}{}",
        component_to_hex(color.r),
        component_to_hex(color.g),
        component_to_hex(color.b)
    )
}

/// Perceived brightness, 0 (black) to 255 (white)
pub fn calculate_brightness(hex: &str) -> Option<u8> {
    let rgb = hex_to_rgb(hex)?;
    let luma = 0.2126 * f64::from(rgb.r) + 0.7152 * f64::from(rgb.g) + 0.0722 * f64::from(rgb.b);
    Some(round_half_up(luma).clamp(0.0, 255.0) as u8)
}

/// Move `dark` toward `light` in proportion to `brightness / 255`
pub fn calculate_individual_color_adjust(dark: i32, light: i32, brightness: i32) -> i32 {
    let diff = f64::from(dark - light);
    let adjust = round_half_up(diff * (f64::from(brightness) / 255.0)) as i32;
    dark - adjust
}

/// Accent that stays legible on the given background
pub fn calculate_logo_color(background: &str) -> Option<String> {
    let brightness = i32::from(calculate_brightness(background)?);

    let adjust = |dark: u8, light: u8| {
        calculate_individual_color_adjust(i32::from(dark), i32::from(light), brightness).clamp(0, 255) as u8
    };

    Some(rgb_to_hex(Rgb {
        r: adjust(DARK_ENDPOINT.r, LIGHT_ENDPOINT.r),
        g: adjust(DARK_ENDPOINT.g, LIGHT_ENDPOINT.g),
        b: adjust(DARK_ENDPOINT.b, LIGHT_ENDPOINT.b),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(Rgb { r: 0, g: 0, b: 0 }), "#000000");
        assert_eq!(rgb_to_hex(Rgb { r: 255, g: 255, b: 255 }), "#ffffff");
    }

    #[test]
    fn test_component_to_hex_pads() {
        assert_eq!(component_to_hex(0), "00");
        assert_eq!(component_to_hex(10), "0a");
        assert_eq!(component_to_hex(255), "ff");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#000000"), Some(Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(hex_to_rgb("000000"), Some(Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(hex_to_rgb("#ffffff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(hex_to_rgb("FAFAD2"), Some(Rgb { r: 250, g: 250, b: 210 }));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#gggggg"), None);
        assert_eq!(hex_to_rgb("##000000"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#2f4f4f", "#111111", "#EEEEEE", "fafad2"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), Some(rgb));
        }
    }

    #[test]
    fn test_brightness_range() {
        assert_eq!(calculate_brightness("#000000"), Some(0));
        assert_eq!(calculate_brightness("#ffffff"), Some(255));
        assert_eq!(calculate_brightness("nope"), None);
    }

    #[test]
    fn test_individual_color_adjust() {
        assert_eq!(calculate_individual_color_adjust(0, 255, 255), 255);
        assert_eq!(calculate_individual_color_adjust(0, 255, 0), 0);
    }

    #[test]
    fn test_logo_color_endpoints() {
        assert_eq!(calculate_logo_color("#000000").as_deref(), Some("#f08080"));
        assert_eq!(calculate_logo_color("#ffffff").as_deref(), Some("#800000"));
    }

    #[test]
    fn test_logo_color_mid_grey_sits_between_endpoints() {
        let rgb = hex_to_rgb(&calculate_logo_color("#808080").unwrap()).unwrap();
        assert!(rgb.r < DARK_ENDPOINT.r && rgb.r > LIGHT_ENDPOINT.r);
        assert!(rgb.g < DARK_ENDPOINT.g && rgb.g > LIGHT_ENDPOINT.g);
    }
}
