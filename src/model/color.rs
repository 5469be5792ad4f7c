//! Color parsing shared by task data and color mappings.
//!
//! Task data arrives with CSS-style color strings (`#4caf50`, `red`); the
//! widget works in `Color32` throughout, so colors are converted once at
//! deserialization time.

use egui::Color32;

/// Parse `#rgb` / `#rrggbb` hex plus the handful of named colors that show
/// up in task data. Returns `None` for anything else.
pub fn parse(s: &str) -> Option<Color32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Color32::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color32::from_rgb(r, g, b))
            }
            _ => None,
        };
    }
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color32::BLACK),
        "white" => Some(Color32::WHITE),
        "red" => Some(Color32::from_rgb(0xf4, 0x43, 0x36)),
        "green" => Some(Color32::from_rgb(0x4c, 0xaf, 0x50)),
        "blue" => Some(Color32::from_rgb(0x21, 0x96, 0xf3)),
        "orange" => Some(Color32::from_rgb(0xff, 0xa7, 0x26)),
        "gray" | "grey" => Some(Color32::from_rgb(0x66, 0x66, 0x66)),
        _ => None,
    }
}

pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Serde helper for `Option<Color32>` fields stored as color strings.
pub mod serde_opt {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Option<Color32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(c) => serializer.serialize_some(&to_hex(*c)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown color `{s}`"))),
            None => Ok(None),
        }
    }
}

/// Serde helper for `HashMap<String, Color32>` color maps.
pub mod serde_map {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S>(map: &HashMap<String, Color32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex: HashMap<&str, String> = map.iter().map(|(k, v)| (k.as_str(), to_hex(*v))).collect();
        serde::Serialize::serialize(&hex, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<String, Color32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, String> = HashMap::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(k, v)| {
                parse(&v)
                    .map(|c| (k, c))
                    .ok_or_else(|| serde::de::Error::custom(format!("unknown color `{v}`")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named() {
        assert_eq!(parse("#4CAF50"), Some(Color32::from_rgb(0x4c, 0xaf, 0x50)));
        assert_eq!(parse("#fff"), Some(Color32::WHITE));
        assert_eq!(parse("black"), Some(Color32::BLACK));
        assert_eq!(parse("not-a-color"), None);
    }

    #[test]
    fn hex_round_trip() {
        let c = Color32::from_rgb(0x90, 0xca, 0xf9);
        assert_eq!(parse(&to_hex(c)), Some(c));
    }
}
