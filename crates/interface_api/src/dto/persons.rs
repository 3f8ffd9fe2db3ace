//! Person DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Amount, PartyId};
use domain_party::{LegalForm, Person};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterPersonRequest {
    /// Company id (6 or 8 digits) or birth number (9 or 10 digits)
    #[validate(length(min = 6, max = 10))]
    pub registration_number: String,
}

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: PartyId,
    pub registration_number: String,
    pub legal_form: LegalForm,
    pub paid_out_amount: Amount,
}

impl From<&Person> for PersonResponse {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            registration_number: person.registration_number.clone(),
            legal_form: person.legal_form,
            paid_out_amount: person.paid_out_amount,
        }
    }
}
