use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::Uri,
    Json,
};
use serde::Deserialize;
use streams_core::catalog::{self, CatalogOutput};

use super::error::ApiError;
use super::AppState;

const DEFAULT_LETTER: &str = "A";
const DEFAULT_LENGTH: i32 = 5;
const DEFAULT_VALUE: i32 = 10;

/// Query parameters are read as raw text so that `?length=` behaves like a
/// missing `length` and falls back to its default.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub letter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PredicateParams {
    pub length: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UnaryParams {
    pub value: Option<String>,
}

/// The raw value, or `None` when the parameter is missing or empty
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Parse an integer parameter, using `default` when it is missing or empty
fn int_param(name: &str, raw: Option<&str>, default: i32) -> Result<i32, ApiError> {
    match non_empty(raw) {
        None => Ok(default),
        Some(value) => value.parse::<i32>().map_err(|e| {
            ApiError::BadRequest(format!("invalid `{name}` parameter {value:?}: {e}"))
        }),
    }
}

/// GET /streams
pub async fn index() -> Json<CatalogOutput> {
    Json(catalog::catalog())
}

/// GET /streams/map
pub async fn map_to_upper(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.names.map_to_upper())
}

/// GET /streams/filter?letter=
pub async fn filter_by_starting_letter(
    State(state): State<AppState>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(params) = params?;
    let letter = non_empty(params.letter.as_deref()).unwrap_or(DEFAULT_LETTER);
    Ok(Json(state.names.filter_by_starting_letter(letter)))
}

/// GET /streams/predicate?length=
pub async fn filter_by_length(
    State(state): State<AppState>,
    params: Result<Query<PredicateParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(params) = params?;
    let length = int_param("length", params.length.as_deref(), DEFAULT_LENGTH)?;
    Ok(Json(state.names.filter_by_length_greater_than(length)))
}

/// GET /streams/supplier
pub async fn generate_identifier(State(state): State<AppState>) -> String {
    state.names.generate_identifier()
}

/// GET /streams/consumer
pub async fn format_all(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.names.format_all())
}

/// GET /streams/unary?value=
pub async fn double(
    State(state): State<AppState>,
    params: Result<Query<UnaryParams>, QueryRejection>,
) -> Result<Json<i32>, ApiError> {
    let Query(params) = params?;
    let value = int_param("value", params.value.as_deref(), DEFAULT_VALUE)?;
    Ok(Json(state.names.double(value)))
}

/// POST /streams/binary
pub async fn sum(
    State(state): State<AppState>,
    body: Result<Json<Vec<i32>>, JsonRejection>,
) -> Result<Json<i32>, ApiError> {
    let Json(numbers) = body?;
    Ok(Json(state.names.sum(&numbers)))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
