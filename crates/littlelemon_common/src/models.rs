// --- File: crates/littlelemon_common/src/models.rs ---
//! Reservation data shared by the booking crate, its collaborators and the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest party the restaurant books.
pub const MIN_GUESTS: u8 = 1;
/// Largest party the restaurant books online.
pub const MAX_GUESTS: u8 = 10;

/// A completed, validated reservation as handed to the submission collaborator.
///
/// On the wire: `{"date":"2025-06-14","time":"17:00","guests":4,"occasion":"","seating":""}`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date", example = "2025-06-14"))]
    pub date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "17:00"))]
    pub time: String,
    #[cfg_attr(feature = "openapi", schema(example = 4))]
    pub guests: u8,
    #[serde(default)]
    pub occasion: Occasion,
    #[serde(default)]
    pub seating: Seating,
}

/// Returned when a select value is not one of the offered options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Birthday,
    Anniversary,
    Business,
    Casual,
    Celebration,
}

impl Occasion {
    pub const ALL: [Occasion; 6] = [
        Occasion::Unspecified,
        Occasion::Birthday,
        Occasion::Anniversary,
        Occasion::Business,
        Occasion::Casual,
        Occasion::Celebration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Unspecified => "",
            Occasion::Birthday => "birthday",
            Occasion::Anniversary => "anniversary",
            Occasion::Business => "business",
            Occasion::Casual => "casual",
            Occasion::Celebration => "celebration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Unspecified => "Select an occasion (optional)",
            Occasion::Birthday => "Birthday",
            Occasion::Anniversary => "Anniversary",
            Occasion::Business => "Business Dinner",
            Occasion::Casual => "Casual Dining",
            Occasion::Celebration => "Celebration",
        }
    }
}

impl FromStr for Occasion {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occasion::ALL
            .into_iter()
            .find(|occasion| occasion.as_str() == s)
            .ok_or_else(|| UnknownChoice {
                kind: "occasion",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seating {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Indoor,
    Outdoor,
    Window,
    Quiet,
}

impl Seating {
    pub const ALL: [Seating; 5] = [
        Seating::Unspecified,
        Seating::Indoor,
        Seating::Outdoor,
        Seating::Window,
        Seating::Quiet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Seating::Unspecified => "",
            Seating::Indoor => "indoor",
            Seating::Outdoor => "outdoor",
            Seating::Window => "window",
            Seating::Quiet => "quiet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Seating::Unspecified => "Select seating preference (optional)",
            Seating::Indoor => "Indoor",
            Seating::Outdoor => "Outdoor",
            Seating::Window => "Window Seat",
            Seating::Quiet => "Quiet Area",
        }
    }
}

impl FromStr for Seating {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seating::ALL
            .into_iter()
            .find(|seating| seating.as_str() == s)
            .ok_or_else(|| UnknownChoice {
                kind: "seating",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Seating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
