//! Claim payouts

use serde::Serialize;

use core_kernel::{Amount, PartyId};

/// Amount owed to one person by a settled claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClaimPayout {
    pub payee: PartyId,
    pub amount: Amount,
}
