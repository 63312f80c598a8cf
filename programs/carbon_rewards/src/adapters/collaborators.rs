use anchor_lang::prelude::*;

use crate::constants::*;
use crate::engine::{DataVerifier, MetricsSource};
use crate::error::CarbonRewardsError;
use crate::state::{DataVerification, FarmRecord, SoilMetrics};
use crate::utils::{read_account, require_pda_address};

/// Accounts supplied for one claimed period
pub struct PeriodAccounts<'a, 'info> {
    pub period: u64,
    /// SoilMetrics account of the metrics program
    pub soil_metrics: &'a AccountInfo<'info>,
    /// DataVerification account of the verifier program
    pub verification: &'a AccountInfo<'info>,
    /// ClaimRecord PDA of this program, possibly not yet created
    pub claim_record: &'a AccountInfo<'info>,
    pub claim_bump: u8,
}

/// Finds the accounts supplied for `period`
pub fn period_accounts<'s, 'a, 'info>(
    periods: &'s [PeriodAccounts<'a, 'info>],
    period: u64,
) -> Result<&'s PeriodAccounts<'a, 'info>> {
    periods
        .iter()
        .find(|accounts| accounts.period == period)
        .ok_or_else(|| error!(CarbonRewardsError::InvalidBatchAccounts))
}

/**
 * Metrics and verification lookups over collaborator-owned accounts
 *
 * Each lookup first checks that the account sits at the collaborator's PDA
 * for the requested farm (and period), then deserializes it at call time.
 * An empty account reads as absent (no owner, zero sequestered, unverified).
 * A populated account must be owned by the configured collaborator program
 * and describe the requested farm and period. Any mismatch fails with
 * CollaboratorMismatch.
 */
pub struct CollaboratorAccounts<'a, 'info> {
    metrics_program: Pubkey,
    verifier_program: Pubkey,
    farm: &'a AccountInfo<'info>,
    periods: &'a [PeriodAccounts<'a, 'info>],
}

impl<'a, 'info> CollaboratorAccounts<'a, 'info> {
    pub fn new(
        metrics_program: Pubkey,
        verifier_program: Pubkey,
        farm: &'a AccountInfo<'info>,
        periods: &'a [PeriodAccounts<'a, 'info>],
    ) -> Self {
        Self {
            metrics_program,
            verifier_program,
            farm,
            periods,
        }
    }
}

impl MetricsSource for CollaboratorAccounts<'_, '_> {
    fn farm_owner(&self, farm_id: u64) -> Result<Option<Pubkey>> {
        require_pda_address(
            self.farm,
            &[FARM_SEED.as_bytes(), &farm_id.to_le_bytes()],
            &self.metrics_program,
        )?;
        match read_account::<FarmRecord>(self.farm, &self.metrics_program)? {
            Some(record) => {
                require!(
                    record.farm_id == farm_id,
                    CarbonRewardsError::CollaboratorMismatch
                );
                Ok(Some(record.owner))
            }
            None => Ok(None),
        }
    }

    fn sequestered_amount(&self, farm_id: u64, period: u64) -> Result<u64> {
        let accounts = period_accounts(self.periods, period)?;
        require_pda_address(
            accounts.soil_metrics,
            &[
                SOIL_METRICS_SEED.as_bytes(),
                &farm_id.to_le_bytes(),
                &period.to_le_bytes(),
            ],
            &self.metrics_program,
        )?;
        match read_account::<SoilMetrics>(accounts.soil_metrics, &self.metrics_program)? {
            Some(metrics) => {
                require!(
                    metrics.farm_id == farm_id && metrics.period == period,
                    CarbonRewardsError::CollaboratorMismatch
                );
                Ok(metrics.sequestered_amount)
            }
            None => Ok(0),
        }
    }
}

impl DataVerifier for CollaboratorAccounts<'_, '_> {
    fn is_data_verified(&self, farm_id: u64, period: u64) -> Result<bool> {
        let accounts = period_accounts(self.periods, period)?;
        require_pda_address(
            accounts.verification,
            &[
                VERIFICATION_SEED.as_bytes(),
                &farm_id.to_le_bytes(),
                &period.to_le_bytes(),
            ],
            &self.verifier_program,
        )?;
        match read_account::<DataVerification>(accounts.verification, &self.verifier_program)? {
            Some(verification) => {
                require!(
                    verification.farm_id == farm_id && verification.period == period,
                    CarbonRewardsError::CollaboratorMismatch
                );
                Ok(verification.verified)
            }
            None => Ok(false),
        }
    }
}
