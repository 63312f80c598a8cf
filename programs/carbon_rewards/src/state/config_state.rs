use anchor_lang::prelude::*;

use crate::constants::*;
use crate::engine::calculator::calculate_reward;

/**
 * Program configuration account
 *
 * Singleton holding every tunable scalar of the reward program, the
 * collaborator addresses it trusts, and the program-wide reward accumulator.
 *
 * Derivation: ["config"]
 *
 * Lifecycle:
 * 1. Created during initialize; the signer becomes the owner
 * 2. Parameters and collaborators updated through the admin instructions
 * 3. total_rewards_distributed incremented by every committed claim
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ProgramConfig {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed of the mint authority PDA
    /// - Saved to avoid recomputation when signing mint CPIs
    pub mint_authority_bump: u8,

    /// Owner of the program
    /// - Sole authority for collaborator changes and pausing
    /// - May also tune the reward formula alongside the DAO
    pub owner: Pubkey,

    /// Global halt for claims
    pub paused: bool,

    /// Reward multiplier (scale 1e6, domain (0, 5_000_000])
    pub reward_multiplier: u64,

    /// Emission-reduction factor (scale 1e6, domain [500_000, 1_000_000])
    pub emission_reduction_factor: u64,

    /// Sum of all rewards ever committed
    /// - Only ever increased, by committed claims
    pub total_rewards_distributed: u64,

    /// Reward token mint
    pub token_mint: Pubkey,

    /// Program owning FarmRecord and SoilMetrics accounts
    pub metrics_program: Pubkey,

    /// Program owning DataVerification accounts
    pub verifier_program: Pubkey,

    /// Program owning the GovernanceState account
    pub governance_program: Pubkey,
}

/// Collaborator addresses supplied at initialization
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollaboratorAddresses {
    pub token_mint: Pubkey,
    pub metrics_program: Pubkey,
    pub verifier_program: Pubkey,
    pub governance_program: Pubkey,
}

/// Selector for the collaborator address being replaced
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollaboratorKind {
    Token,
    Metrics,
    Verifier,
    Governance,
}

impl ProgramConfig {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ProgramConfig>();

    /// Fresh configuration with default formula parameters
    pub fn new(owner: Pubkey, collaborators: CollaboratorAddresses) -> Self {
        Self {
            bump: 0,
            mint_authority_bump: 0,
            owner,
            paused: false,
            reward_multiplier: DEFAULT_REWARD_MULTIPLIER,
            emission_reduction_factor: DEFAULT_EMISSION_REDUCTION_FACTOR,
            total_rewards_distributed: 0,
            token_mint: collaborators.token_mint,
            metrics_program: collaborators.metrics_program,
            verifier_program: collaborators.verifier_program,
            governance_program: collaborators.governance_program,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn collaborator(&self, kind: CollaboratorKind) -> Pubkey {
        match kind {
            CollaboratorKind::Token => self.token_mint,
            CollaboratorKind::Metrics => self.metrics_program,
            CollaboratorKind::Verifier => self.verifier_program,
            CollaboratorKind::Governance => self.governance_program,
        }
    }

    pub(crate) fn collaborator_mut(&mut self, kind: CollaboratorKind) -> &mut Pubkey {
        match kind {
            CollaboratorKind::Token => &mut self.token_mint,
            CollaboratorKind::Metrics => &mut self.metrics_program,
            CollaboratorKind::Verifier => &mut self.verifier_program,
            CollaboratorKind::Governance => &mut self.governance_program,
        }
    }

    /// Reward a claim of `sequestered` would mint under the live parameters
    /// - Read only; available to any caller
    pub fn estimate_reward(&self, sequestered: u64) -> Result<u64> {
        calculate_reward(
            sequestered,
            self.reward_multiplier,
            self.emission_reduction_factor,
        )
    }
}
