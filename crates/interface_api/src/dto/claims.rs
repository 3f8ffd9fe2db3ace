//! Claims DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Amount, ClaimId, PartyId};
use domain_claims::{ClaimKind, ClaimSettlement};

#[derive(Debug, Deserialize, Validate)]
pub struct VehicleClaimRequest {
    #[validate(length(min = 1))]
    pub contract_number: String,
    #[validate(range(min = 1))]
    pub expected_damage: Amount,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TravelClaimRequest {
    #[validate(length(min = 1))]
    pub contract_number: String,
    #[validate(length(min = 1))]
    pub affected_persons: Vec<PartyId>,
}

#[derive(Debug, Serialize)]
pub struct PayoutResponse {
    pub payee: PartyId,
    pub amount: Amount,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub kind: ClaimKind,
    pub contract_number: String,
    pub settled_at: NaiveDateTime,
    pub payouts: Vec<PayoutResponse>,
    pub total_paid: Amount,
    pub contract_deactivated: bool,
}

impl From<ClaimSettlement> for ClaimResponse {
    fn from(settlement: ClaimSettlement) -> Self {
        let total_paid = settlement.total_paid();
        Self {
            id: settlement.id,
            kind: settlement.kind,
            contract_number: settlement.contract_number.to_string(),
            settled_at: settlement.settled_at,
            payouts: settlement
                .payouts
                .into_iter()
                .map(|p| PayoutResponse {
                    payee: p.payee,
                    amount: p.amount,
                })
                .collect(),
            total_paid,
            contract_deactivated: settlement.deactivates_contract,
        }
    }
}
