use anchor_lang::prelude::*;

// Layouts of the accounts this program reads from its collaborators.
// They are owned by the collaborator programs recorded in ProgramConfig and
// are never written here. Each one lives at a PDA of its owning program, and
// the adapters reject an account found at any other address.

/// Farm registration, owned by the metrics program
/// - Derived from: ["farm", farm_id]
#[account]
#[derive(Default, Debug)]
pub struct FarmRecord {
    pub farm_id: u64,
    pub owner: Pubkey,
}

/// Sequestration measurement for one period, owned by the metrics program
/// - Derived from: ["soil_metrics", farm_id, period]
#[account]
#[derive(Default, Debug)]
pub struct SoilMetrics {
    pub farm_id: u64,
    pub period: u64,
    /// Sequestered CO2-equivalent (scale 1e6)
    pub sequestered_amount: u64,
}

/// Oracle verdict for one period, owned by the verifier program
/// - Derived from: ["verification", farm_id, period]
#[account]
#[derive(Default, Debug)]
pub struct DataVerification {
    pub farm_id: u64,
    pub period: u64,
    pub verified: bool,
}

/// Governance singleton, owned by the governance program
/// - Derived from: ["governance"]
#[account]
#[derive(Default, Debug)]
pub struct GovernanceState {
    /// Address currently acting for the DAO
    pub dao_address: Pubkey,
}
