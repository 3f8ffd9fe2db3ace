//! Person handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::PartyId;
use domain_party::Person;

use crate::{AppState, error::ApiError};
use crate::dto::persons::*;

/// Registers a person from a registration number
pub async fn register_person(
    State(state): State<AppState>,
    Json(request): Json<RegisterPersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), ApiError> {
    request.validate()?;
    let person = Person::new(request.registration_number)?;

    let mut company = state.company.write().await;
    let id = company.register_person(person)?;
    let person = company
        .person(&id)
        .ok_or_else(|| ApiError::Internal(format!("Person {} vanished after registration", id)))?;
    Ok((StatusCode::CREATED, Json(PersonResponse::from(person))))
}

/// Gets a person by ID
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PersonResponse>, ApiError> {
    let id: PartyId = id
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid person id {}: {}", id, e)))?;

    let company = state.company.read().await;
    let person = company
        .person(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Person {} not found", id)))?;
    Ok(Json(PersonResponse::from(person)))
}
