//! Add-dish form draft
//!
//! A [`DishDraft`] holds what the user has typed so far. It is checked field
//! by field before anything reaches the [`MenuStore`].

use super::helpers::parse_price;
use super::models::{CourseType, Dish, DishCandidate};
use super::state::MenuStore;
use crate::error::ValidationError;
use serde::{Deserialize, Deserializer};

/// Transient state of the add-dish form.
///
/// `course_type: None` means no course has been selected yet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DishDraft {
    #[serde(deserialize_with = "deserialize_course_selection")]
    pub course_type: Option<CourseType>,
    pub dish_name: String,
    pub dish_description: String,
    pub dish_price: String,
}

/// Accepts a course name, or an empty string / null for "no selection".
fn deserialize_course_selection<'de, D>(deserializer: D) -> Result<Option<CourseType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl DishDraft {
    /// Checks the draft and builds the store input.
    ///
    /// Checks run in a fixed order (course, name, description, price present,
    /// price valid) and the first failure is returned.
    pub fn validate(&self) -> Result<DishCandidate, ValidationError> {
        let course_type = self.course_type.ok_or(ValidationError::CourseNotSelected)?;

        let dish_name = self.dish_name.trim();
        if dish_name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let dish_description = self.dish_description.trim();
        if dish_description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        if self.dish_price.trim().is_empty() {
            return Err(ValidationError::MissingPrice);
        }
        let dish_price = parse_price(&self.dish_price).ok_or(ValidationError::InvalidPrice)?;

        Ok(DishCandidate {
            course_type,
            dish_name: dish_name.to_string(),
            dish_description: dish_description.to_string(),
            dish_price,
        })
    }

    /// Validates, adds the dish to `store`, and clears the draft.
    ///
    /// On failure the draft keeps its contents and the store is untouched.
    pub fn submit(&mut self, store: &mut MenuStore) -> Result<Dish, ValidationError> {
        let candidate = self.validate()?;
        let dish = store.add(candidate)?;
        self.reset();
        Ok(dish)
    }

    /// Clears every field and the course selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
