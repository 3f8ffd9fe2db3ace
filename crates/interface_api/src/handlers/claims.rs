//! Claims handlers

use axum::{extract::State, Json};
use validator::Validate;

use super::contract_number;
use crate::{AppState, error::ApiError};
use crate::dto::claims::*;

/// Settles a vehicle-damage claim
pub async fn vehicle_claim(
    State(state): State<AppState>,
    Json(request): Json<VehicleClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    request.validate()?;
    let number = contract_number(request.contract_number)?;

    let mut company = state.company.write().await;
    let settlement = company.process_vehicle_claim(&number, request.expected_damage)?;
    Ok(Json(ClaimResponse::from(settlement)))
}

/// Settles a travel claim for the affected persons
pub async fn travel_claim(
    State(state): State<AppState>,
    Json(request): Json<TravelClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    request.validate()?;
    let number = contract_number(request.contract_number)?;

    let mut company = state.company.write().await;
    let settlement = company.process_travel_claim(&number, &request.affected_persons)?;
    Ok(Json(ClaimResponse::from(settlement)))
}
