use anchor_lang::prelude::*;

use crate::constants::CLAIM_COOLDOWN;
use crate::error::CarbonRewardsError;
use crate::state::{ClaimRecord, LastClaimCursor};

/**
 * Claim ledger
 *
 * Durable map of (farm, period) -> ClaimRecord plus the per-farm
 * LastClaimCursor. record_claim is the only mutation of claim state.
 *
 * Invariants every implementation upholds:
 * - a claimed record is never overwritten
 * - record_claim overwrites the farm's cursor with (period, block_height)
 */
pub trait ClaimLedger {
    /// Record for (farm_id, period), if one was ever written
    fn claim_record(&self, farm_id: u64, period: u64) -> Result<Option<ClaimRecord>>;

    /// Cursor of the farm's most recent claim, if the farm ever claimed
    fn last_claim(&self, farm_id: u64) -> Result<Option<LastClaimCursor>>;

    /// Inserts a claimed record and moves the farm cursor
    fn record_claim(
        &mut self,
        farm_id: u64,
        period: u64,
        sequestered_amount: u64,
        reward_amount: u64,
        block_height: u64,
    ) -> Result<()>;
}

/// Fails with CooldownNotMet when the farm claimed less than CLAIM_COOLDOWN blocks ago.
/// The check ignores periods: any recent claim of the farm blocks every period.
pub fn check_cooldown<L: ClaimLedger + ?Sized>(
    ledger: &L,
    farm_id: u64,
    current_block: u64,
) -> Result<()> {
    if let Some(cursor) = ledger.last_claim(farm_id)? {
        require!(
            current_block.saturating_sub(cursor.last_block) >= CLAIM_COOLDOWN,
            CarbonRewardsError::CooldownNotMet
        );
    }
    Ok(())
}

/// Builds the record written by record_claim
pub fn claimed_record(
    farm_id: u64,
    period: u64,
    sequestered_amount: u64,
    reward_amount: u64,
    block_height: u64,
) -> ClaimRecord {
    ClaimRecord {
        bump: 0,
        farm_id,
        period,
        claimed: true,
        sequestered_amount,
        reward_amount,
        claim_time: block_height,
    }
}
