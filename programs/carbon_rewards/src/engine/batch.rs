use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH_PERIODS;
use crate::engine::collaborators::{DataVerifier, MetricsSource, TokenMinter};
use crate::engine::ledger::ClaimLedger;
use crate::engine::orchestrator::ClaimEngine;
use crate::error::CarbonRewardsError;

impl<'a, L, M, V, T> ClaimEngine<'a, L, M, V, T>
where
    L: ClaimLedger,
    M: MetricsSource,
    V: DataVerifier,
    T: TokenMinter,
{
    /**
     * Claims several periods of one farm in order
     *
     * @param caller - Signer of the batch; must own the farm
     * @param farm_id - Farm being claimed for
     * @param periods - Periods to claim, at most MAX_BATCH_PERIODS
     * @param current_block - Block height shared by every claim of the batch
     *
     * Returns the sum of the rewards, or the error of the first period that
     * fails. Periods after the failing one are not attempted; periods before
     * it stay committed (see committed()).
     */
    pub fn batch_claim_rewards(
        &mut self,
        caller: &Pubkey,
        farm_id: u64,
        periods: &[u64],
        current_block: u64,
    ) -> Result<u64> {
        require!(
            periods.len() <= MAX_BATCH_PERIODS,
            CarbonRewardsError::BatchTooLarge
        );

        let mut total: u64 = 0;
        for &period in periods {
            let receipt = match self.claim_reward(caller, farm_id, period, current_block) {
                Ok(receipt) => receipt,
                Err(err) => {
                    msg!(
                        "batch halted: farm={} period={} after {} claim(s)",
                        farm_id,
                        period,
                        self.committed().len()
                    );
                    return Err(err);
                }
            };
            total = total
                .checked_add(receipt.reward_amount)
                .ok_or(CarbonRewardsError::CalculationOverflow)?;
        }

        Ok(total)
    }
}
