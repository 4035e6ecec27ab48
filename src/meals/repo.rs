use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use super::types::{Location, MealType};

/// One logged eating event. Records are immutable once stored; the journal
/// has no update or delete operation, entries live until the process ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub side_dishes: String,
    /// Raw date text as entered, "YYYY-M-D" style. Components need not be
    /// zero-padded.
    pub date: String,
    pub meal_type: MealType,
    pub review: String,
    pub image_uri: Option<String>,
    /// Assigned when the entry is recorded, never user-entered.
    pub calories: i32,
    pub cost: i32,
}

/// In-memory meal history, one insertion-ordered sequence per venue.
///
/// Reports are scoped to the trailing calendar month ending at the caller's
/// reference date. The window boundary moves with the reference date, so
/// every report is recomputed from the stored records on each call.
#[derive(Debug)]
pub struct MealJournal {
    meals: HashMap<Location, Vec<Meal>>,
}

impl MealJournal {
    pub fn new() -> Self {
        let meals = Location::ALL
            .into_iter()
            .map(|location| (location, Vec::new()))
            .collect();
        Self { meals }
    }

    /// Appends a meal to the venue's history, preserving insertion order.
    /// Duplicate names and dates are allowed.
    pub fn add(&mut self, location: Location, meal: Meal) {
        self.meals.entry(location).or_default().push(meal);
    }

    /// Full history for one venue, oldest first.
    pub fn for_location(&self, location: Location) -> &[Meal] {
        self.meals
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every meal across all venues whose date falls within the trailing
    /// calendar month: parsed date strictly after `reference - 1 month`.
    /// Meals whose date text fails to parse are left out.
    pub fn in_window(&self, reference: Date) -> Vec<&Meal> {
        let window_start = one_month_before(reference);
        Location::ALL
            .iter()
            .flat_map(|location| self.for_location(*location))
            .filter(|meal| {
                parse_meal_date(&meal.date).map_or(false, |date| date > window_start)
            })
            .collect()
    }

    pub fn total_calories_in_window(&self, reference: Date) -> i64 {
        self.in_window(reference)
            .iter()
            .map(|meal| i64::from(meal.calories))
            .sum()
    }

    /// Cost of the trailing month's meals, grouped by category. Categories
    /// with no meals in the window are absent from the map, not zero.
    pub fn cost_by_meal_type(&self, reference: Date) -> BTreeMap<MealType, i64> {
        let mut by_type = BTreeMap::new();
        for meal in self.in_window(reference) {
            *by_type.entry(meal.meal_type).or_insert(0) += i64::from(meal.cost);
        }
        by_type
    }
}

impl Default for MealJournal {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses journal date text. The date picker historically emitted unpadded
/// components ("2025-3-7"), so both padded and unpadded forms are accepted;
/// the components must name a real calendar date.
pub fn parse_meal_date(text: &str) -> Option<Date> {
    let mut parts = text.splitn(3, '-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u8 = parts.next()?.trim().parse().ok()?;
    let day: u8 = parts.next()?.trim().parse().ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Calendar-aware "one month ago": the month steps back once, rolling the
/// year at January, and the day clamps to the target month's length.
pub fn one_month_before(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::January => (date.year() - 1, Month::December),
        other => (date.year(), other.previous()),
    };
    let day = date.day().min(month.length(year));
    Date::from_calendar_date(year, month, day).expect("clamped day fits the month")
}
