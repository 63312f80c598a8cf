use anchor_lang::prelude::*;

use crate::state::CollaboratorKind;

/// Event emitted when the program configuration is created
#[event]
pub struct ProgramInitialized {
    /// The configuration account public key
    pub config: Pubkey,
    /// Owner of the program configuration
    pub owner: Pubkey,
    /// Reward token mint
    pub token_mint: Pubkey,
    /// Program owning farm and soil metric records
    pub metrics_program: Pubkey,
    /// Program owning data verification records
    pub verifier_program: Pubkey,
    /// Program owning the governance state
    pub governance_program: Pubkey,
}

/// Event emitted when a collaborator address is replaced
#[event]
pub struct CollaboratorUpdated {
    /// Which collaborator was replaced
    pub kind: CollaboratorKind,
    /// Previous address
    pub previous: Pubkey,
    /// New address
    pub address: Pubkey,
}

/// Event emitted when the program is paused or unpaused
#[event]
pub struct PauseStateChanged {
    /// Authority who toggled the flag
    pub authority: Pubkey,
    /// New value of the pause flag
    pub paused: bool,
}

/// Event emitted when the reward multiplier changes
#[event]
pub struct RewardMultiplierUpdated {
    /// Owner or DAO who made the change
    pub authority: Pubkey,
    /// Previous multiplier (scale 1e6)
    pub previous: u64,
    /// New multiplier (scale 1e6)
    pub multiplier: u64,
}

/// Event emitted when the emission-reduction factor changes
#[event]
pub struct EmissionFactorUpdated {
    /// Owner or DAO who made the change
    pub authority: Pubkey,
    /// Previous factor (scale 1e6)
    pub previous: u64,
    /// New factor (scale 1e6)
    pub factor: u64,
}

/// Event emitted for every committed claim, single or batched
#[event]
pub struct RewardClaimed {
    /// Farm the reward was claimed for
    pub farm_id: u64,
    /// Period the reward was claimed for
    pub period: u64,
    /// Farm owner who received the minted tokens
    pub claimant: Pubkey,
    /// Sequestered amount reported for the period (scale 1e6)
    pub sequestered_amount: u64,
    /// Minted reward (scale 1e6)
    pub reward_amount: u64,
    /// Block height (slot) at which the claim was committed
    pub claim_block: u64,
    /// Program-wide reward total after this claim
    pub total_rewards_distributed: u64,
}

/// Event emitted once per batch claim
#[event]
pub struct BatchClaimSettled {
    /// Farm the batch was submitted for
    pub farm_id: u64,
    /// Farm owner who submitted the batch
    pub claimant: Pubkey,
    /// Number of periods requested
    pub requested_periods: u8,
    /// Number of periods committed before the batch stopped
    pub committed_periods: u8,
    /// Sum of the committed rewards
    pub total_reward: u64,
    /// Period that stopped the batch, if any
    pub failed_period: Option<u64>,
    /// Error code of the failing period, if any
    pub error_code: Option<u32>,
}
