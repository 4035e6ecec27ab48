use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::state::AppState;

use super::dto::{
    AnalysisResponse, CreateMealRequest, CreatedMealResponse, LocationInfo, MealDetails,
    MealListItem,
};
use super::services;
use super::types::{Location, MealType};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(list_locations))
        .route(
            "/locations/:location/meals",
            get(list_meals).post(create_meal),
        )
        .route("/meals/recent", get(recent_meals))
        .route("/meals/recent/:name", get(meal_details))
        .route("/analysis", get(monthly_analysis))
}

async fn list_locations() -> Json<Vec<LocationInfo>> {
    let venues = Location::ALL
        .into_iter()
        .map(|location| LocationInfo {
            slug: location.slug(),
            label: location.label(),
        })
        .collect();
    Json(venues)
}

#[instrument(skip(state))]
async fn list_meals(
    State(state): State<AppState>,
    Path(location): Path<Location>,
) -> Json<Vec<MealListItem>> {
    let journal = state.journal.read().await;
    let items = journal
        .for_location(location)
        .iter()
        .map(MealListItem::from)
        .collect();
    Json(items)
}

#[instrument(skip(state, body))]
async fn create_meal(
    State(state): State<AppState>,
    Path(location): Path<Location>,
    Json(body): Json<CreateMealRequest>,
) -> Result<(StatusCode, HeaderMap, Json<CreatedMealResponse>), (StatusCode, String)> {
    let meal = match services::compose_meal(body) {
        Ok(meal) => meal,
        Err(e) => {
            warn!(error = %e, location = location.slug(), "rejected meal entry");
            return Err((StatusCode::BAD_REQUEST, e.to_string()));
        }
    };

    let response = CreatedMealResponse {
        location: location.slug(),
        name: meal.name.clone(),
        calories: meal.calories,
        cost: meal.cost,
    };

    state.journal.write().await.add(location, meal);
    info!(
        location = location.slug(),
        name = %response.name,
        calories = response.calories,
        "meal recorded"
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::LOCATION,
        format!("/api/v1/locations/{}/meals", location.slug())
            .parse()
            .unwrap(),
    );

    Ok((StatusCode::CREATED, headers, Json(response)))
}

#[instrument(skip(state))]
async fn recent_meals(State(state): State<AppState>) -> Json<Vec<MealListItem>> {
    let today = OffsetDateTime::now_utc().date();
    let journal = state.journal.read().await;
    let items = journal
        .in_window(today)
        .into_iter()
        .map(MealListItem::from)
        .collect();
    Json(items)
}

/// Detail lookup is by name within the trailing month, first match wins,
/// matching how the app navigates from its lists.
#[instrument(skip(state))]
async fn meal_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MealDetails>, (StatusCode, String)> {
    let today = OffsetDateTime::now_utc().date();
    let journal = state.journal.read().await;
    match journal
        .in_window(today)
        .into_iter()
        .find(|meal| meal.name == name)
    {
        Some(meal) => Ok(Json(MealDetails::from(meal))),
        None => {
            warn!(%name, "meal not found in the trailing month");
            Err((StatusCode::NOT_FOUND, "Meal not found".into()))
        }
    }
}

#[instrument(skip(state))]
async fn monthly_analysis(State(state): State<AppState>) -> Json<AnalysisResponse> {
    let today = OffsetDateTime::now_utc().date();
    let journal = state.journal.read().await;

    let cost_by_type = journal.cost_by_meal_type(today);
    let total_cost = cost_by_type.values().sum();

    let mut meals_by_type: BTreeMap<MealType, Vec<MealListItem>> = MealType::PICKABLE
        .into_iter()
        .map(|meal_type| (meal_type, Vec::new()))
        .collect();
    for meal in journal.in_window(today) {
        meals_by_type
            .entry(meal.meal_type)
            .or_default()
            .push(MealListItem::from(meal));
    }

    Json(AnalysisResponse {
        total_calories: journal.total_calories_in_window(today),
        total_cost,
        cost_by_type,
        meals_by_type,
    })
}
