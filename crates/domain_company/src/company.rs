//! The insurer aggregate and contract lookup

use tracing::{debug, info};

use core_kernel::{Amount, ContractNumber, InsurerId, LogicalClock, PartyId, Timestamp};
use domain_billing::{PaymentHandler, PaymentInstance, PaymentLedger};
use domain_claims::SettlementRules;
use domain_contract::{
    Billable, Contract, ContractKind, ContractNumberRegistry, InsuranceContract,
    IssuedContractNumbers, MasterVehicleContract, PaymentSchedule, SingleVehicleContract,
    UnderwritingRules,
};
use domain_party::{Person, PersonDirectory};
use crate::error::CompanyError;

/// Where a contract lives inside the company
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    TopLevel(usize),
    Child { master: usize, child: usize },
}

/// Borrowed view of any contract the company holds, top level or child
#[derive(Debug, Clone, Copy)]
pub enum ContractRef<'a> {
    TopLevel(&'a Contract),
    Child {
        master: &'a MasterVehicleContract,
        contract: &'a SingleVehicleContract,
    },
}

impl<'a> ContractRef<'a> {
    pub fn contract_number(&self) -> &'a ContractNumber {
        match *self {
            ContractRef::TopLevel(c) => c.contract_number(),
            ContractRef::Child { contract, .. } => contract.contract_number(),
        }
    }

    pub fn kind(&self) -> ContractKind {
        match *self {
            ContractRef::TopLevel(c) => c.kind(),
            ContractRef::Child { .. } => ContractKind::SingleVehicle,
        }
    }

    pub fn is_active(&self) -> bool {
        match *self {
            ContractRef::TopLevel(c) => c.is_active(),
            ContractRef::Child { contract, .. } => contract.is_active(),
        }
    }

    pub fn policy_holder(&self) -> PartyId {
        match *self {
            ContractRef::TopLevel(c) => c.policy_holder(),
            ContractRef::Child { contract, .. } => contract.policy_holder(),
        }
    }

    pub fn coverage_amount(&self) -> Amount {
        match *self {
            ContractRef::TopLevel(c) => c.coverage_amount(),
            ContractRef::Child { contract, .. } => contract.coverage_amount(),
        }
    }

    /// The schedule, if the contract has one
    pub fn schedule(&self) -> Option<&'a PaymentSchedule> {
        match *self {
            ContractRef::TopLevel(c) => c.schedule(),
            ContractRef::Child { contract, .. } => Some(contract.schedule()),
        }
    }

    /// Number of the grouping contract holding this one
    pub fn master_number(&self) -> Option<&'a ContractNumber> {
        match *self {
            ContractRef::TopLevel(_) => None,
            ContractRef::Child { master, .. } => Some(master.contract_number()),
        }
    }

    /// The contract as a single-vehicle contract, wherever it lives
    pub fn as_single_vehicle(&self) -> Option<&'a SingleVehicleContract> {
        match *self {
            ContractRef::TopLevel(c) => c.as_single_vehicle(),
            ContractRef::Child { contract, .. } => Some(contract),
        }
    }
}

/// One insurer: its clock, contracts, persons, ledger and rules
#[derive(Debug, Clone)]
pub struct InsuranceCompany {
    pub(crate) id: InsurerId,
    pub(crate) clock: LogicalClock,
    pub(crate) contracts: Vec<Contract>,
    pub(crate) issued: IssuedContractNumbers,
    pub(crate) persons: PersonDirectory,
    pub(crate) handler: PaymentHandler,
    pub(crate) underwriting: UnderwritingRules,
    pub(crate) settlement: SettlementRules,
}

impl InsuranceCompany {
    /// Creates an insurer with default rules whose clock reads `now`
    pub fn new(now: Timestamp) -> Self {
        let id = InsurerId::new_v7();
        Self {
            id,
            clock: LogicalClock::new(now),
            contracts: Vec::new(),
            issued: IssuedContractNumbers::new(),
            persons: PersonDirectory::new(),
            handler: PaymentHandler::new(id),
            underwriting: UnderwritingRules::default(),
            settlement: SettlementRules::default(),
        }
    }

    /// Creates an insurer with explicit rules
    ///
    /// # Errors
    ///
    /// Returns an argument error if a ratio lies outside `[0, 1]`
    pub fn with_rules(
        now: Timestamp,
        underwriting: UnderwritingRules,
        settlement: SettlementRules,
    ) -> Result<Self, CompanyError> {
        underwriting.validate()?;
        settlement.validate()?;
        info!(?underwriting, ?settlement, "insurer created with custom rules");
        Ok(Self {
            underwriting,
            settlement,
            ..Self::new(now)
        })
    }

    pub fn id(&self) -> InsurerId {
        self.id
    }

    pub fn underwriting_rules(&self) -> &UnderwritingRules {
        &self.underwriting
    }

    pub fn settlement_rules(&self) -> &SettlementRules {
        &self.settlement
    }

    pub fn current_time(&self) -> Timestamp {
        self.clock.now()
    }

    /// Moves the logical clock. Any value is accepted, including the past.
    pub fn set_current_time(&mut self, now: Timestamp) {
        debug!(from = %self.clock.now(), to = %now, "clock moved");
        self.clock.set(now);
    }

    /// Moves the logical clock forward by whole months
    pub fn advance_months(&mut self, months: u32) -> Result<Timestamp, CompanyError> {
        Ok(self.clock.advance_months(months).map_err(core_kernel::CoreError::from)?)
    }

    /// Registers a person with this insurer
    pub fn register_person(&mut self, person: Person) -> Result<PartyId, CompanyError> {
        Ok(self.persons.register(person)?)
    }

    pub fn person(&self, id: &PartyId) -> Option<&Person> {
        self.persons.get(id)
    }

    pub fn persons(&self) -> &PersonDirectory {
        &self.persons
    }

    /// Top-level contracts in issuance order
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Top-level contracts whose policy holder is `party`
    pub fn contracts_held_by(&self, party: PartyId) -> impl Iterator<Item = &Contract> {
        self.contracts
            .iter()
            .filter(move |c| c.policy_holder() == party)
    }

    /// Finds a contract by number, looking inside masters too
    pub fn contract(&self, number: &ContractNumber) -> Option<ContractRef<'_>> {
        match self.locate(number)? {
            Location::TopLevel(index) => Some(ContractRef::TopLevel(&self.contracts[index])),
            Location::Child { master, child } => {
                let master = self.contracts[master].as_master_vehicle()?;
                Some(ContractRef::Child {
                    master,
                    contract: &master.children()[child],
                })
            }
        }
    }

    /// Finds a contract or fails with `ContractNotFound`
    pub fn require_contract(&self, number: &ContractNumber) -> Result<ContractRef<'_>, CompanyError> {
        self.contract(number).ok_or_else(|| CompanyError::not_found(number))
    }

    /// Outstanding balance of a scheduled contract
    pub fn balance(&self, number: &ContractNumber) -> Result<Amount, CompanyError> {
        let contract = self.require_contract(number)?;
        contract
            .schedule()
            .map(PaymentSchedule::outstanding_balance)
            .ok_or_else(|| CompanyError::WrongContractKind(format!("{} has no schedule", number)))
    }

    /// Payments recorded against a contract, in time order
    pub fn payment_history(&self, number: &ContractNumber) -> &[PaymentInstance] {
        self.handler.ledger().entries(number)
    }

    pub fn ledger(&self) -> &PaymentLedger {
        self.handler.ledger()
    }

    /// Whether a contract number was ever issued by this insurer
    pub fn is_contract_number_taken(&self, number: &ContractNumber) -> bool {
        self.issued.is_taken(number)
    }

    pub(crate) fn locate(&self, number: &ContractNumber) -> Option<Location> {
        for (index, contract) in self.contracts.iter().enumerate() {
            if contract.contract_number() == number {
                return Some(Location::TopLevel(index));
            }
            if let Contract::MasterVehicle(master) = contract {
                if let Some(child) = master
                    .children()
                    .iter()
                    .position(|c| c.contract_number() == number)
                {
                    return Some(Location::Child {
                        master: index,
                        child,
                    });
                }
            }
        }
        None
    }

    pub(crate) fn require_location(&self, number: &ContractNumber) -> Result<Location, CompanyError> {
        self.locate(number).ok_or_else(|| CompanyError::not_found(number))
    }

    /// Mutable access to a single-vehicle contract, top level or child
    pub(crate) fn single_vehicle_mut(
        &mut self,
        number: &ContractNumber,
    ) -> Result<&mut SingleVehicleContract, CompanyError> {
        let wrong_kind = || CompanyError::WrongContractKind(format!("{} is not a single-vehicle contract", number));
        match self.require_location(number)? {
            Location::TopLevel(index) => self.contracts[index]
                .as_single_vehicle_mut()
                .ok_or_else(wrong_kind),
            Location::Child { master, child } => self.contracts[master]
                .as_master_vehicle_mut()
                .map(|m| &mut m.children_mut()[child])
                .ok_or_else(wrong_kind),
        }
    }
}
