//! Clock, charging and payment handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use super::contract_number;
use crate::{AppState, error::ApiError};
use crate::dto::billing::*;

/// Reads the insurer's logical clock
pub async fn get_clock(State(state): State<AppState>) -> Json<ClockResponse> {
    let company = state.company.read().await;
    Json(ClockResponse {
        now: company.current_time(),
    })
}

/// Moves the logical clock to any reading
pub async fn set_clock(
    State(state): State<AppState>,
    Json(request): Json<SetClockRequest>,
) -> Json<ClockResponse> {
    let mut company = state.company.write().await;
    company.set_current_time(request.now);
    Json(ClockResponse {
        now: company.current_time(),
    })
}

/// Moves the logical clock forward by whole months
pub async fn advance_clock(
    State(state): State<AppState>,
    Json(request): Json<AdvanceClockRequest>,
) -> Result<Json<ClockResponse>, ApiError> {
    request.validate()?;
    let mut company = state.company.write().await;
    let now = company.advance_months(request.months)?;
    Ok(Json(ClockResponse { now }))
}

/// Charges every due premium up to the current time
pub async fn charge_all(State(state): State<AppState>) -> Result<Json<ChargeResponse>, ApiError> {
    let mut company = state.company.write().await;
    let periods = company.charge_premiums_on_contracts()?;
    Ok(Json(ChargeResponse {
        periods,
        now: company.current_time(),
    }))
}

/// Charges due premiums on one contract
pub async fn charge_contract(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<ChargeResponse>, ApiError> {
    let number = contract_number(number)?;
    let mut company = state.company.write().await;
    let periods = company.charge_premium_on_contract(&number)?;
    Ok(Json(ChargeResponse {
        periods,
        now: company.current_time(),
    }))
}

/// Pays into a contract at the current time
pub async fn pay(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(request): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), ApiError> {
    request.validate()?;
    let number = contract_number(number)?;

    let mut company = state.company.write().await;
    company.pay(&number, request.amount)?;
    let payment = company
        .payment_history(&number)
        .iter()
        .rev()
        .find(|p| p.paid_at == company.current_time())
        .ok_or_else(|| ApiError::Internal(format!("Payment on {} was not recorded", number)))?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(payment))))
}

/// Lists payments recorded against a contract
pub async fn payment_history(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<PaymentHistoryResponse>, ApiError> {
    let number = contract_number(number)?;

    let company = state.company.read().await;
    company.require_contract(&number)?;
    Ok(Json(PaymentHistoryResponse {
        contract_number: number.to_string(),
        total_paid: company.ledger().total_paid(&number),
        payments: company
            .payment_history(&number)
            .iter()
            .map(PaymentResponse::from)
            .collect(),
    }))
}
