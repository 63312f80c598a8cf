use anchor_lang::prelude::*;

declare_id!("CarbRwd1Yx7q3VJmTgPpS4fZ2kQ9nHhD8uLwE6sAoXbG");

pub mod adapters;
pub mod constants;
pub mod engine;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{CollaboratorAddresses, CollaboratorKind};

/**
 * Carbon Rewards Program
 *
 * Converts verified CO2-sequestration measurements into minted token rewards.
 *
 * Key Features:
 * - One claim per (farm, period), enforced by claim record PDAs
 * - Farm-wide cooldown of CLAIM_COOLDOWN slots between successful claims
 * - Deterministic fixed-point reward formula (scale 1e6)
 * - Batch claims of up to MAX_BATCH_PERIODS periods with short-circuit on first rejection
 * - Bounded formula tuning by the owner or the governance DAO
 * - Global pause switch
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022 reward mints
 *
 * Architecture:
 * - Config PDA: formula parameters, collaborator addresses, reward accumulator
 * - Claim Record PDAs: per (farm, period) claim outcome
 * - Cursor PDAs: per farm most recent claim block
 * - Mint Authority PDA: signs reward mints
 * - Collaborator accounts (read only): farm records and soil metrics (metrics
 *   program), verification verdicts (verifier program), DAO address
 *   (governance program)
 *
 * Workflow:
 * 1. Owner initializes the config and hands the reward mint authority to the PDA
 * 2. Metrics and verifier programs publish farm data per period
 * 3. Farm owners claim verified periods, singly or in batches
 * 4. Owner or DAO tunes the multiplier and emission factor within bounds
 */
#[program]
pub mod carbon_rewards {
    use super::*;

    /**
     * Creates the program configuration
     *
     * @param ctx - Account context containing config, mint authority and owner accounts
     * @param collaborators - Reward mint and collaborator program addresses
     *
     * Access Control: Anyone, once; the signer becomes the owner
     */
    pub fn initialize(ctx: Context<Initialize>, collaborators: CollaboratorAddresses) -> Result<()> {
        handle_initialize(ctx, collaborators)
    }

    /**
     * Replaces a collaborator address
     *
     * @param ctx - Account context containing config and authority accounts
     * @param kind - Collaborator to replace
     * @param address - New address
     *
     * Access Control: Owner only
     */
    pub fn set_collaborator_address(
        ctx: Context<ConfigAuthority>,
        kind: CollaboratorKind,
        address: Pubkey,
    ) -> Result<()> {
        handle_set_collaborator_address(ctx, kind, address)
    }

    /**
     * Halts all claims
     *
     * Access Control: Owner only
     */
    pub fn pause(ctx: Context<ConfigAuthority>) -> Result<()> {
        handle_pause(ctx)
    }

    /**
     * Resumes claims
     *
     * Access Control: Owner only
     */
    pub fn unpause(ctx: Context<ConfigAuthority>) -> Result<()> {
        handle_unpause(ctx)
    }

    /**
     * Updates the reward multiplier
     *
     * @param ctx - Account context containing config, governance state and authority
     * @param multiplier - New multiplier (scale 1e6), in (0, 5_000_000]
     *
     * Access Control: Owner or governance DAO
     */
    pub fn update_reward_multiplier(ctx: Context<UpdateParameter>, multiplier: u64) -> Result<()> {
        handle_update_reward_multiplier(ctx, multiplier)
    }

    /**
     * Updates the emission-reduction factor
     *
     * @param ctx - Account context containing config, governance state and authority
     * @param factor - New factor (scale 1e6), in [500_000, 1_000_000]
     *
     * Access Control: Owner or governance DAO
     */
    pub fn update_emission_factor(ctx: Context<UpdateParameter>, factor: u64) -> Result<()> {
        handle_update_emission_factor(ctx, factor)
    }

    /**
     * Claims the reward of one verified period
     *
     * @param ctx - Account context containing config, collaborator, ledger and token accounts
     * @param farm_id - Farm being claimed for
     * @param period - Measurement period being claimed
     *
     * Access Control: Farm owner
     */
    pub fn claim_reward(ctx: Context<ClaimReward>, farm_id: u64, period: u64) -> Result<()> {
        handle_claim_reward(ctx, farm_id, period)
    }

    /**
     * Claims several periods of one farm
     *
     * @param ctx - Account context; per-period accounts passed as remaining accounts
     * @param farm_id - Farm being claimed for
     * @param periods - Periods to claim, in order, at most MAX_BATCH_PERIODS
     *
     * Access Control: Farm owner
     * Note: A rejected period ends the batch and is reported in the returned outcome
     */
    pub fn batch_claim_rewards<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchClaimRewards<'info>>,
        farm_id: u64,
        periods: Vec<u64>,
    ) -> Result<BatchClaimOutcome> {
        handle_batch_claim_rewards(ctx, farm_id, periods)
    }

    /**
     * Estimates the reward for a sequestered amount under the live parameters
     *
     * @param ctx - Account context containing the config account
     * @param sequestered - Sequestered amount (scale 1e6)
     *
     * Access Control: Anyone; read only
     */
    pub fn estimate_reward(ctx: Context<EstimateReward>, sequestered: u64) -> Result<u64> {
        handle_estimate_reward(ctx, sequestered)
    }
}
