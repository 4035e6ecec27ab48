use serde::{Deserialize, Serialize};

/// The campus venues a meal can be logged against. The set is fixed; venues
/// are not user-creatable, so every venue's history exists from startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "sangnokwon-2f")]
    Sangnokwon2F,
    #[serde(rename = "sangnokwon-3f")]
    Sangnokwon3F,
    #[serde(rename = "dorm-cafeteria")]
    DormCafeteria,
}

impl Location {
    pub const ALL: [Location; 3] = [
        Location::Sangnokwon2F,
        Location::Sangnokwon3F,
        Location::DormCafeteria,
    ];

    /// Stable path segment used in routes and payloads.
    pub fn slug(self) -> &'static str {
        match self {
            Location::Sangnokwon2F => "sangnokwon-2f",
            Location::Sangnokwon3F => "sangnokwon-3f",
            Location::DormCafeteria => "dorm-cafeteria",
        }
    }

    /// Display name as shown in the app.
    pub fn label(self) -> &'static str {
        match self {
            Location::Sangnokwon2F => "상록원 2층",
            Location::Sangnokwon3F => "상록원 3층",
            Location::DormCafeteria => "기숙사 식당",
        }
    }
}

/// Meal category. `Other` is the fallback when the form is submitted with
/// no type selected; it is never offered as a choice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Other,
}

impl MealType {
    /// The categories the entry form offers, in display order.
    pub const PICKABLE: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "조식",
            MealType::Lunch => "중식",
            MealType::Dinner => "석식",
            MealType::Snack => "간식/음료",
            MealType::Other => "기타",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_slugs_round_trip_through_serde() {
        for location in Location::ALL {
            let json = serde_json::to_string(&location).expect("serialize location");
            assert_eq!(json, format!("\"{}\"", location.slug()));
            let back: Location = serde_json::from_str(&json).expect("deserialize location");
            assert_eq!(back, location);
        }
    }

    #[test]
    fn unknown_location_slug_is_rejected() {
        let err = serde_json::from_str::<Location>("\"food-court\"").unwrap_err();
        assert!(err.to_string().contains("food-court") || err.is_data());
    }

    #[test]
    fn other_is_not_pickable() {
        assert!(!MealType::PICKABLE.contains(&MealType::Other));
    }
}
