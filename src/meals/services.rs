use rand::Rng;
use thiserror::Error;

use super::dto::CreateMealRequest;
use super::repo::{parse_meal_date, Meal};
use super::types::MealType;

/// Form input that cannot become a journal entry. Surfaced to the client
/// instead of silently zeroing or dropping the record, so "no data" and
/// "malformed data" stay distinguishable.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("cost must be a whole number, got {0:?}")]
    InvalidCost(String),
    #[error("date must be year-month-day text, got {0:?}")]
    InvalidDate(String),
}

/// Calorie estimate for a new entry, drawn from a fixed range per category.
/// Entries without a category get no estimate.
pub fn estimate_calories<R: Rng>(meal_type: MealType, rng: &mut R) -> i32 {
    match meal_type {
        MealType::Breakfast => rng.gen_range(300..=400),
        MealType::Lunch => rng.gen_range(700..=900),
        MealType::Dinner => rng.gen_range(800..=1000),
        MealType::Snack => rng.gen_range(100..=250),
        MealType::Other => 0,
    }
}

/// A blank cost field counts as zero; anything else must parse as a whole
/// number of won.
pub fn parse_cost(text: &str) -> Result<i32, EntryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| EntryError::InvalidCost(text.to_string()))
}

/// Turns the raw form fields into a journal entry: validates the date text,
/// parses the cost and assigns the calorie estimate.
pub fn compose_meal(req: CreateMealRequest) -> Result<Meal, EntryError> {
    if parse_meal_date(&req.date).is_none() {
        return Err(EntryError::InvalidDate(req.date));
    }
    let cost = parse_cost(&req.cost)?;
    let meal_type = req.meal_type.unwrap_or(MealType::Other);
    let calories = estimate_calories(meal_type, &mut rand::thread_rng());

    Ok(Meal {
        name: req.name,
        side_dishes: req.side_dishes,
        date: req.date,
        meal_type,
        review: req.review,
        image_uri: req.image_uri,
        calories,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: &str, cost: &str, meal_type: Option<MealType>) -> CreateMealRequest {
        CreateMealRequest {
            name: "제육볶음".to_string(),
            side_dishes: "김치".to_string(),
            date: date.to_string(),
            cost: cost.to_string(),
            review: String::new(),
            meal_type,
            image_uri: None,
        }
    }

    #[test]
    fn calorie_estimates_stay_inside_the_fixed_ranges() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            assert!((300..=400).contains(&estimate_calories(MealType::Breakfast, &mut rng)));
            assert!((700..=900).contains(&estimate_calories(MealType::Lunch, &mut rng)));
            assert!((800..=1000).contains(&estimate_calories(MealType::Dinner, &mut rng)));
            assert!((100..=250).contains(&estimate_calories(MealType::Snack, &mut rng)));
        }
        assert_eq!(estimate_calories(MealType::Other, &mut rng), 0);
    }

    #[test]
    fn blank_cost_counts_as_zero() {
        assert_eq!(parse_cost("").expect("blank cost"), 0);
        assert_eq!(parse_cost("   ").expect("whitespace cost"), 0);
        assert_eq!(parse_cost("6500").expect("numeric cost"), 6500);
        assert_eq!(parse_cost(" 6500 ").expect("padded numeric cost"), 6500);
    }

    #[test]
    fn malformed_cost_is_rejected() {
        let err = parse_cost("six thousand").unwrap_err();
        assert!(matches!(err, EntryError::InvalidCost(_)));
        assert!(parse_cost("6,500").is_err());
        assert!(parse_cost("65.5").is_err());
    }

    #[test]
    fn compose_meal_rejects_bad_dates() {
        let err = compose_meal(request("2025-2-30", "5000", Some(MealType::Lunch))).unwrap_err();
        assert!(matches!(err, EntryError::InvalidDate(_)));
        assert!(compose_meal(request("", "5000", Some(MealType::Lunch))).is_err());
    }

    #[test]
    fn compose_meal_defaults_missing_category_to_other() {
        let meal = compose_meal(request("2025-3-7", "", None)).expect("compose");
        assert_eq!(meal.meal_type, MealType::Other);
        assert_eq!(meal.calories, 0);
        assert_eq!(meal.cost, 0);
        assert_eq!(meal.date, "2025-3-7");
    }

    #[test]
    fn compose_meal_assigns_calories_from_the_category() {
        let meal = compose_meal(request("2025-3-7", "8000", Some(MealType::Dinner))).expect("compose");
        assert!((800..=1000).contains(&meal.calories));
        assert_eq!(meal.cost, 8000);
    }
}
