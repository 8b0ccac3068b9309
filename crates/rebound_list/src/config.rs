//! Widget configuration
//!
//! Hosts hand configuration over as a string attribute map (the common
//! shape of markup/resource systems). Missing or malformed values fall back
//! to the documented defaults - construction never fails on bad input.

use rebound_paint::Color;
use rustc_hash::FxHashMap;

/// Attribute keys recognized by [`BouncyConfig::from_attrs`]
pub mod attrs {
    pub const TENSION: &str = "tension";
    pub const STRENGTH: &str = "strength";
    pub const START_INDEX_OFFSET: &str = "startIndexOffset";
    pub const END_INDEX_OFFSET: &str = "endIndexOffset";
    pub const START_OVERSCROLL_COLOR: &str = "startOverscrollColor";
    pub const END_OVERSCROLL_COLOR: &str = "endOverscrollColor";
}

/// Configuration for the bouncy list widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BouncyConfig {
    /// First row allowed to translate; rows before it stay fixed (headers)
    pub start_index_offset: usize,
    /// Rows this far from the end stay fixed (footers)
    pub end_index_offset: usize,
    /// Scales the effective maximum overscroll distance
    pub tension: f32,
    /// Inversely scales the spring-back duration
    pub strength: f32,
    /// Fill behind rows stretched past the start edge; transparent disables
    pub start_overscroll_color: Color,
    /// Fill behind rows stretched past the end edge; transparent disables
    pub end_overscroll_color: Color,
}

impl Default for BouncyConfig {
    fn default() -> Self {
        Self {
            start_index_offset: 0,
            end_index_offset: 0,
            tension: 1.0,
            strength: 1.0,
            start_overscroll_color: Color::TRANSPARENT,
            end_overscroll_color: Color::TRANSPARENT,
        }
    }
}

impl BouncyConfig {
    /// Build a config from a host attribute map, falling back to defaults
    /// for anything missing or unparseable
    pub fn from_attrs(map: &FxHashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            start_index_offset: parse_attr(
                map,
                attrs::START_INDEX_OFFSET,
                defaults.start_index_offset,
            ),
            end_index_offset: parse_attr(map, attrs::END_INDEX_OFFSET, defaults.end_index_offset),
            tension: parse_attr(map, attrs::TENSION, defaults.tension),
            strength: parse_attr(map, attrs::STRENGTH, defaults.strength),
            start_overscroll_color: parse_color_attr(
                map,
                attrs::START_OVERSCROLL_COLOR,
                defaults.start_overscroll_color,
            ),
            end_overscroll_color: parse_color_attr(
                map,
                attrs::END_OVERSCROLL_COLOR,
                defaults.end_overscroll_color,
            ),
        }
    }
}

fn parse_attr<T>(map: &FxHashMap<String, String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match map.get(key) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, value = %raw, %error, "malformed attribute, using default");
                default
            }
        },
    }
}

fn parse_color_attr(map: &FxHashMap<String, String>, key: &str, default: Color) -> Color {
    match map.get(key) {
        None => default,
        Some(raw) => match Color::parse(raw) {
            Ok(color) => color,
            Err(error) => {
                tracing::warn!(key, value = %raw, %error, "malformed color attribute, using default");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> FxHashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_attrs_yield_defaults() {
        let config = BouncyConfig::from_attrs(&map(&[]));
        assert_eq!(config, BouncyConfig::default());
        assert_eq!(config.tension, 1.0);
        assert_eq!(config.strength, 1.0);
        assert!(config.start_overscroll_color.is_transparent());
    }

    #[test]
    fn test_valid_attrs_parse() {
        let config = BouncyConfig::from_attrs(&map(&[
            ("tension", "1.5"),
            ("strength", "0.5"),
            ("startIndexOffset", "1"),
            ("endIndexOffset", "2"),
            ("startOverscrollColor", "#FF0000"),
            ("endOverscrollColor", "#0000FF"),
        ]));

        assert_eq!(config.tension, 1.5);
        assert_eq!(config.strength, 0.5);
        assert_eq!(config.start_index_offset, 1);
        assert_eq!(config.end_index_offset, 2);
        assert_eq!(config.start_overscroll_color, Color::RED);
        assert_eq!(config.end_overscroll_color, Color::BLUE);
    }

    #[test]
    fn test_malformed_attrs_fall_back() {
        let config = BouncyConfig::from_attrs(&map(&[
            ("tension", "not-a-number"),
            ("startIndexOffset", "-3"),
            ("startOverscrollColor", "red"),
        ]));

        assert_eq!(config.tension, 1.0);
        assert_eq!(config.start_index_offset, 0);
        assert!(config.start_overscroll_color.is_transparent());
    }
}
