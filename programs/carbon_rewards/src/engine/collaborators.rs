use anchor_lang::prelude::*;

// Capability interfaces of the external collaborators. Each call is a fresh
// lookup; implementations must not cache across calls.

/// Farm ownership and sequestration measurements
pub trait MetricsSource {
    /// Owner of the farm, or None when the farm is not registered
    fn farm_owner(&self, farm_id: u64) -> Result<Option<Pubkey>>;

    /// Sequestered amount reported for the period (scale 1e6); 0 when unreported
    fn sequestered_amount(&self, farm_id: u64, period: u64) -> Result<u64>;
}

/// Oracle verification of a farm's period data
pub trait DataVerifier {
    fn is_data_verified(&self, farm_id: u64, period: u64) -> Result<bool>;
}

/// Current DAO address of the governance collaborator
pub trait GovernanceOracle {
    fn dao_address(&self) -> Result<Pubkey>;
}

/// Reward token issuance
pub trait TokenMinter {
    fn mint(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}
