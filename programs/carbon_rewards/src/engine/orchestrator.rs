use anchor_lang::prelude::*;

use crate::constants::MIN_SEQUESTERED;
use crate::engine::calculator::calculate_reward;
use crate::engine::collaborators::{DataVerifier, MetricsSource, TokenMinter};
use crate::engine::ledger::{check_cooldown, ClaimLedger};
use crate::error::CarbonRewardsError;
use crate::state::ProgramConfig;

/// Outcome of a committed claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub farm_id: u64,
    pub period: u64,
    pub claimant: Pubkey,
    pub sequestered_amount: u64,
    pub reward_amount: u64,
    pub claim_block: u64,
    /// Program-wide total after this claim
    pub total_rewards_distributed: u64,
}

/**
 * Claim engine
 *
 * Runs the claim state machine against a program configuration, a claim
 * ledger and the collaborator capabilities. The engine borrows everything it
 * touches for the duration of one instruction.
 *
 * Every committed claim is also appended to an in-memory journal so the
 * caller can emit one event per claim once the engine is done.
 */
pub struct ClaimEngine<'a, L, M, V, T>
where
    L: ClaimLedger,
    M: MetricsSource,
    V: DataVerifier,
    T: TokenMinter,
{
    config: &'a mut ProgramConfig,
    ledger: &'a mut L,
    metrics: &'a M,
    verifier: &'a V,
    minter: &'a mut T,
    journal: Vec<ClaimReceipt>,
}

impl<'a, L, M, V, T> ClaimEngine<'a, L, M, V, T>
where
    L: ClaimLedger,
    M: MetricsSource,
    V: DataVerifier,
    T: TokenMinter,
{
    pub fn new(
        config: &'a mut ProgramConfig,
        ledger: &'a mut L,
        metrics: &'a M,
        verifier: &'a V,
        minter: &'a mut T,
    ) -> Self {
        Self {
            config,
            ledger,
            metrics,
            verifier,
            minter,
            journal: Vec::new(),
        }
    }

    /// Claims committed by this engine, in commit order
    pub fn committed(&self) -> &[ClaimReceipt] {
        &self.journal
    }

    /**
     * Claims the reward of one (farm, period)
     *
     * @param caller - Signer of the claim; must own the farm
     * @param farm_id - Farm being claimed for
     * @param period - Measurement period being claimed
     * @param current_block - Block height at which the claim executes
     *
     * Validation order (first failure wins, nothing is written):
     * 1. Paused
     * 2. InvalidFarm, then Unauthorized
     * 3. UnverifiedData
     * 4. InsufficientSequestered
     * 5. CooldownNotMet
     * 6. RewardAlreadyClaimed
     * 7. CalculationOverflow
     *
     * Commit order: ledger record, reward accumulator, then mint.
     */
    pub fn claim_reward(
        &mut self,
        caller: &Pubkey,
        farm_id: u64,
        period: u64,
        current_block: u64,
    ) -> Result<ClaimReceipt> {
        // ===== VALIDATION PHASE (reads only) =====

        require!(!self.config.is_paused(), CarbonRewardsError::Paused);

        let farm_owner = self
            .metrics
            .farm_owner(farm_id)?
            .ok_or(CarbonRewardsError::InvalidFarm)?;
        require_keys_eq!(*caller, farm_owner, CarbonRewardsError::Unauthorized);

        require!(
            self.verifier.is_data_verified(farm_id, period)?,
            CarbonRewardsError::UnverifiedData
        );

        let sequestered = self.metrics.sequestered_amount(farm_id, period)?;
        require!(
            sequestered >= MIN_SEQUESTERED,
            CarbonRewardsError::InsufficientSequestered
        );

        check_cooldown(&*self.ledger, farm_id, current_block)?;

        if let Some(record) = self.ledger.claim_record(farm_id, period)? {
            require!(!record.claimed, CarbonRewardsError::RewardAlreadyClaimed);
        }

        let reward = calculate_reward(
            sequestered,
            self.config.reward_multiplier,
            self.config.emission_reduction_factor,
        )?;

        // Computed before any write so an overflow leaves state untouched
        let new_total = self
            .config
            .total_rewards_distributed
            .checked_add(reward)
            .ok_or(CarbonRewardsError::CalculationOverflow)?;

        // ===== EFFECTS PHASE (State Updates) =====

        self.ledger
            .record_claim(farm_id, period, sequestered, reward, current_block)?;
        self.config.total_rewards_distributed = new_total;

        // ===== INTERACTIONS PHASE (Token Mint) =====

        self.minter.mint(caller, reward)?;

        msg!(
            "claim committed: farm={} period={} reward={} block={}",
            farm_id,
            period,
            reward,
            current_block
        );

        let receipt = ClaimReceipt {
            farm_id,
            period,
            claimant: *caller,
            sequestered_amount: sequestered,
            reward_amount: reward,
            claim_block: current_block,
            total_rewards_distributed: new_total,
        };
        self.journal.push(receipt);
        Ok(receipt)
    }
}
