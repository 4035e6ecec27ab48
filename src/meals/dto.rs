use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::repo::Meal;
use super::types::MealType;

/// Raw entry-form fields. Cost and date arrive as the text the user typed;
/// the service layer parses and rejects them, the store never sees bad
/// input through this path.
#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    #[serde(default)]
    pub side_dishes: String,
    pub date: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub review: String,
    /// None means no category was selected; the entry falls back to `other`.
    pub meal_type: Option<MealType>,
    pub image_uri: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocationInfo {
    pub slug: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MealListItem {
    pub name: String,
    pub date: String,
    pub meal_type: MealType,
    pub calories: i32,
    pub cost: i32,
}

impl From<&Meal> for MealListItem {
    fn from(meal: &Meal) -> Self {
        Self {
            name: meal.name.clone(),
            date: meal.date.clone(),
            meal_type: meal.meal_type,
            calories: meal.calories,
            cost: meal.cost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MealDetails {
    pub name: String,
    pub side_dishes: String,
    pub date: String,
    pub meal_type: MealType,
    pub meal_type_label: &'static str,
    pub review: String,
    pub image_uri: Option<String>,
    pub calories: i32,
    pub cost: i32,
}

impl From<&Meal> for MealDetails {
    fn from(meal: &Meal) -> Self {
        Self {
            name: meal.name.clone(),
            side_dishes: meal.side_dishes.clone(),
            date: meal.date.clone(),
            meal_type: meal.meal_type,
            meal_type_label: meal.meal_type.label(),
            review: meal.review.clone(),
            image_uri: meal.image_uri.clone(),
            calories: meal.calories,
            cost: meal.cost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedMealResponse {
    pub location: &'static str,
    pub name: String,
    pub calories: i32,
    pub cost: i32,
}

/// Trailing-month report backing the analysis view. `cost_by_type` carries
/// only categories that actually have meals in the window; `meals_by_type`
/// lists every pickable category, empty ones included, the way the
/// analysis view renders its detail sections.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub total_calories: i64,
    pub total_cost: i64,
    pub cost_by_type: BTreeMap<MealType, i64>,
    pub meals_by_type: BTreeMap<MealType, Vec<MealListItem>>,
}
