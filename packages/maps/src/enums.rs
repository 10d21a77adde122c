//! Wire enums.
//!
//! String-valued enums serialize to the exact strings the Maps API defines
//! and parse back with a silent fallback to their default. Unrecognized
//! values are the API's prerogative (new releases grow variants), so the
//! fallback is logged but never surfaced.
//!
//! `ControlPosition`, `Animation` and `StrokePosition` are numbers on the
//! wire and ride `serde_repr`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

use crate::impl_wire_types;

/// A wire value no variant matches.
#[derive(Debug, Error)]
#[error("unrecognized wire value '{0}'")]
pub struct ParseEnumError(String);

macro_rules! parse_or_default {
    ($ty:ident) => {
        impl $ty {
            /// Parse a wire value, falling back to the default on no match.
            pub fn parse_or_default(raw: &str) -> Self {
                raw.parse().unwrap_or_else(|err| {
                    tracing::warn!("{err}, defaulting {}", stringify!($ty));
                    Self::default()
                })
            }
        }
    };
}

/// Base map imagery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapTypeId {
    #[default]
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl FromStr for MapTypeId {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "roadmap" => Ok(Self::Roadmap),
            "satellite" => Ok(Self::Satellite),
            "hybrid" => Ok(Self::Hybrid),
            "terrain" => Ok(Self::Terrain),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

impl MapTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::Satellite => "satellite",
            Self::Hybrid => "hybrid",
            Self::Terrain => "terrain",
        }
    }
}

parse_or_default!(MapTypeId);

/// How the map reacts to scroll and touch gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureHandling {
    #[default]
    Auto,
    Cooperative,
    Greedy,
    None,
}

impl FromStr for GestureHandling {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "auto" => Ok(Self::Auto),
            "cooperative" => Ok(Self::Cooperative),
            "greedy" => Ok(Self::Greedy),
            "none" => Ok(Self::None),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

parse_or_default!(GestureHandling);

/// How an advanced marker behaves when it collides with other markers or
/// labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollisionBehavior {
    #[default]
    Required,
    RequiredAndHidesOptional,
    OptionalAndHidesLowerPriority,
}

impl FromStr for CollisionBehavior {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "REQUIRED" => Ok(Self::Required),
            "REQUIRED_AND_HIDES_OPTIONAL" => Ok(Self::RequiredAndHidesOptional),
            "OPTIONAL_AND_HIDES_LOWER_PRIORITY" => Ok(Self::OptionalAndHidesLowerPriority),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

parse_or_default!(CollisionBehavior);

/// Classic marker animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Animation {
    Bounce = 1,
    Drop = 2,
}

/// Where a stroke is drawn relative to a shape's outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum StrokePosition {
    #[default]
    Center = 0,
    Inside = 1,
    Outside = 2,
}

/// Control placement slots around the map viewport. Values are the API's
/// own numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ControlPosition {
    TopLeft = 1,
    TopCenter = 2,
    TopRight = 3,
    LeftCenter = 4,
    LeftTop = 5,
    LeftBottom = 6,
    RightTop = 7,
    RightCenter = 8,
    RightBottom = 9,
    BottomLeft = 10,
    BottomCenter = 11,
    BottomRight = 12,
}

impl_wire_types!(
    MapTypeId,
    GestureHandling,
    CollisionBehavior,
    Animation,
    StrokePosition,
    ControlPosition,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_enums_serialize_to_wire_strings() {
        assert_eq!(
            serde_json::to_value(MapTypeId::Satellite).unwrap(),
            serde_json::json!("satellite")
        );
        assert_eq!(
            serde_json::to_value(CollisionBehavior::RequiredAndHidesOptional).unwrap(),
            serde_json::json!("REQUIRED_AND_HIDES_OPTIONAL")
        );
        assert_eq!(
            serde_json::to_value(GestureHandling::Cooperative).unwrap(),
            serde_json::json!("cooperative")
        );
    }

    #[test]
    fn integer_enums_serialize_to_wire_numbers() {
        assert_eq!(
            serde_json::to_value(Animation::Drop).unwrap(),
            serde_json::json!(2)
        );
        assert_eq!(
            serde_json::to_value(ControlPosition::BottomCenter).unwrap(),
            serde_json::json!(11)
        );
        assert_eq!(
            serde_json::to_value(StrokePosition::Outside).unwrap(),
            serde_json::json!(2)
        );
    }

    #[test]
    fn parse_round_trips() {
        assert_eq!(
            "hybrid".parse::<MapTypeId>().unwrap(),
            MapTypeId::Hybrid
        );
        assert_eq!(
            "OPTIONAL_AND_HIDES_LOWER_PRIORITY"
                .parse::<CollisionBehavior>()
                .unwrap(),
            CollisionBehavior::OptionalAndHidesLowerPriority
        );
    }

    #[test]
    fn unrecognized_values_fall_back_to_the_default() {
        assert_eq!(MapTypeId::parse_or_default("moon"), MapTypeId::Roadmap);
        assert_eq!(
            GestureHandling::parse_or_default("psychic"),
            GestureHandling::Auto
        );
        assert_eq!(
            CollisionBehavior::parse_or_default(""),
            CollisionBehavior::Required
        );
    }
}
