//! Clock, charging and payment DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Amount, PaymentId};
use domain_billing::PaymentInstance;

#[derive(Debug, Serialize, Deserialize)]
pub struct ClockResponse {
    pub now: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct SetClockRequest {
    pub now: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AdvanceClockRequest {
    #[validate(range(min = 1, max = 1200))]
    pub months: u32,
}

#[derive(Debug, Serialize)]
pub struct ChargeResponse {
    /// Premium periods charged across all contracts
    pub periods: u32,
    pub now: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PaymentRequest {
    #[validate(range(min = 1))]
    pub amount: Amount,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub paid_at: NaiveDateTime,
    pub amount: Amount,
}

impl From<&PaymentInstance> for PaymentResponse {
    fn from(payment: &PaymentInstance) -> Self {
        Self {
            id: payment.id,
            paid_at: payment.paid_at,
            amount: payment.amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentHistoryResponse {
    pub contract_number: String,
    pub total_paid: Amount,
    pub payments: Vec<PaymentResponse>,
}
