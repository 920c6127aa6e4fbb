//! Restaurant Menu Domain Models
//!
//! This module contains all data structures related to the menu
//! business domain.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

// =============================================================================
// Course Types
// =============================================================================

/// The closed set of courses a dish can belong to.
///
/// The derived ordering follows declaration order, which is also the order
/// every per-course view is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CourseType {
    Starter,
    Main,
    Side,
    Dessert,
}

impl CourseType {
    /// All courses, in display order.
    pub const ALL: [CourseType; 4] = [
        CourseType::Starter,
        CourseType::Main,
        CourseType::Side,
        CourseType::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Starter => "Starter",
            CourseType::Main => "Main",
            CourseType::Side => "Side",
            CourseType::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the four courses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course type: {0:?}")]
pub struct UnknownCourse(pub String);

impl FromStr for CourseType {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CourseType::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCourse(s.to_string()))
    }
}

/// Selects which dishes a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Course(CourseType),
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseFilter::All => f.write_str("All"),
            CourseFilter::Course(course) => fmt::Display::fmt(course, f),
        }
    }
}

impl FromStr for CourseFilter {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CourseFilter::All);
        }
        s.parse().map(CourseFilter::Course)
    }
}

impl From<CourseType> for CourseFilter {
    fn from(course: CourseType) -> Self {
        CourseFilter::Course(course)
    }
}

impl Serialize for CourseFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CourseFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Dish Models
// =============================================================================

/// A single menu entry, as held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Store-assigned identifier, never reused within a session
    pub id: u64,

    pub course_type: CourseType,

    /// Trimmed, non-empty
    pub dish_name: String,

    /// Trimmed, non-empty
    pub dish_description: String,

    /// Price with exactly two fractional digits, e.g. `"12.50"`
    pub dish_price: String,
}

/// Validated input for [`MenuStore::add`](super::state::MenuStore::add).
#[derive(Debug, Clone, PartialEq)]
pub struct DishCandidate {
    pub course_type: CourseType,
    pub dish_name: String,
    pub dish_description: String,
    pub dish_price: f64,
}

// =============================================================================
// REST Bodies
// =============================================================================

/// Query string of `GET /dishes`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub course: CourseFilter,
}

/// Response for list operations
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub course: CourseFilter,

    pub dishes: Vec<Dish>,

    /// Number of dishes on the whole menu, regardless of the filter
    pub total: usize,
}

/// Response for removal; unknown ids report `not_found` rather than failing
#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub status: String,
    pub id: u64,
    pub total: usize,
}

/// Response for `GET /averages`
#[derive(Debug, Serialize)]
pub struct AveragesResponse {
    pub averages: std::collections::BTreeMap<CourseType, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_type_parses_names_case_insensitively() {
        assert_eq!("Main".parse::<CourseType>(), Ok(CourseType::Main));
        assert_eq!(" dessert ".parse::<CourseType>(), Ok(CourseType::Dessert));
        assert!("Soup".parse::<CourseType>().is_err());
    }

    #[test]
    fn course_filter_accepts_all_sentinel() {
        assert_eq!("All".parse::<CourseFilter>(), Ok(CourseFilter::All));
        assert_eq!(
            "Side".parse::<CourseFilter>(),
            Ok(CourseFilter::Course(CourseType::Side))
        );
        assert_eq!(CourseFilter::default(), CourseFilter::All);
    }

    #[test]
    fn dish_serializes_with_camel_case_keys() {
        let dish = Dish {
            id: 1,
            course_type: CourseType::Main,
            dish_name: "Soup".into(),
            dish_description: "Hot soup".into(),
            dish_price: "9.50".into(),
        };
        let value = serde_json::to_value(&dish).unwrap();
        assert_eq!(value["courseType"], "Main");
        assert_eq!(value["dishName"], "Soup");
        assert_eq!(value["dishPrice"], "9.50");
    }
}
