//! Derived menu views
//!
//! Pure functions over a snapshot of the store. None of them hold on to the
//! store, so they can be applied to any slice of dishes.

use super::helpers::{parse_price, round_to_cents};
use super::models::{CourseFilter, CourseType, Dish};
use std::collections::BTreeMap;

/// Dishes matching `filter`, in their original order.
///
/// [`CourseFilter::All`] returns the whole snapshot unchanged.
pub fn filter_by_course(snapshot: &[Dish], filter: CourseFilter) -> Vec<Dish> {
    match filter {
        CourseFilter::All => snapshot.to_vec(),
        CourseFilter::Course(course) => snapshot
            .iter()
            .filter(|d| d.course_type == course)
            .cloned()
            .collect(),
    }
}

/// Average price per course, rounded to cents.
///
/// Always holds exactly one entry for each of the four courses, iterated in
/// course order. Courses without dishes average to `0`.
pub fn average_price_by_course(snapshot: &[Dish]) -> BTreeMap<CourseType, f64> {
    CourseType::ALL
        .into_iter()
        .map(|course| {
            let prices: Vec<f64> = snapshot
                .iter()
                .filter(|d| d.course_type == course)
                .map(|d| parse_price(&d.dish_price).unwrap_or(0.0))
                .collect();

            let average = if prices.is_empty() {
                0.0
            } else {
                round_to_cents(prices.iter().sum::<f64>() / prices.len() as f64)
            };
            (course, average)
        })
        .collect()
}

/// Number of dishes per course, with all four courses present.
pub fn count_by_course(snapshot: &[Dish]) -> BTreeMap<CourseType, usize> {
    let mut counts: BTreeMap<CourseType, usize> =
        CourseType::ALL.into_iter().map(|c| (c, 0)).collect();
    for dish in snapshot {
        *counts.entry(dish.course_type).or_default() += 1;
    }
    counts
}
