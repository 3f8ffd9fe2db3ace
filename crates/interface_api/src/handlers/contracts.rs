//! Contract issuance and grouping handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use domain_company::ContractRef;
use domain_party::Vehicle;

use super::contract_number;
use crate::{AppState, error::ApiError};
use crate::dto::contracts::*;

type Created = (StatusCode, Json<ContractResponse>);

/// Insures a single vehicle
pub async fn insure_vehicle(
    State(state): State<AppState>,
    Json(request): Json<InsureVehicleRequest>,
) -> Result<Created, ApiError> {
    request.validate()?;
    let number = contract_number(request.contract_number)?;
    let vehicle = Vehicle::new(request.license_plate, request.original_value)?;

    let mut company = state.company.write().await;
    let number = company.insure_vehicle(
        number,
        request.beneficiary,
        request.policy_holder,
        request.premium,
        request.frequency,
        vehicle,
    )?;
    let contract = company.require_contract(&number)?;
    Ok((StatusCode::CREATED, Json(ContractResponse::from(contract))))
}

/// Insures a group of travellers
pub async fn insure_persons(
    State(state): State<AppState>,
    Json(request): Json<InsurePersonsRequest>,
) -> Result<Created, ApiError> {
    request.validate()?;
    let number = contract_number(request.contract_number)?;

    let mut company = state.company.write().await;
    let number = company.insure_persons(
        number,
        request.policy_holder,
        request.premium,
        request.frequency,
        request.insured_persons,
    )?;
    let contract = company.require_contract(&number)?;
    Ok((StatusCode::CREATED, Json(ContractResponse::from(contract))))
}

/// Creates an empty master contract
pub async fn create_master(
    State(state): State<AppState>,
    Json(request): Json<CreateMasterRequest>,
) -> Result<Created, ApiError> {
    request.validate()?;
    let number = contract_number(request.contract_number)?;

    let mut company = state.company.write().await;
    let number =
        company.create_master_vehicle_contract(number, request.beneficiary, request.policy_holder)?;
    let contract = company.require_contract(&number)?;
    Ok((StatusCode::CREATED, Json(ContractResponse::from(contract))))
}

/// Lists top-level contracts in issuance order
pub async fn list_contracts(State(state): State<AppState>) -> Json<Vec<ContractResponse>> {
    let company = state.company.read().await;
    Json(
        company
            .contracts()
            .iter()
            .map(|c| ContractResponse::from(ContractRef::TopLevel(c)))
            .collect(),
    )
}

/// Gets a contract by number, top level or child
pub async fn get_contract(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<ContractResponse>, ApiError> {
    let number = contract_number(number)?;

    let company = state.company.read().await;
    let contract = company.require_contract(&number)?;
    Ok(Json(ContractResponse::from(contract)))
}

/// Moves a single-vehicle contract under the master in the path
pub async fn add_child(
    State(state): State<AppState>,
    Path(master): Path<String>,
    Json(request): Json<AddChildRequest>,
) -> Result<Json<ContractResponse>, ApiError> {
    request.validate()?;
    let master = contract_number(master)?;
    let single = contract_number(request.contract_number)?;

    let mut company = state.company.write().await;
    company.move_single_vehicle_contract_to_master(&master, &single)?;
    let contract = company.require_contract(&master)?;
    Ok(Json(ContractResponse::from(contract)))
}

/// Deactivates a contract; masters cascade to their children
pub async fn deactivate(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<ContractResponse>, ApiError> {
    let number = contract_number(number)?;

    let mut company = state.company.write().await;
    company.deactivate_contract(&number)?;
    let contract = company.require_contract(&number)?;
    Ok(Json(ContractResponse::from(contract)))
}
