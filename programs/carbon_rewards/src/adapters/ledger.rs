use anchor_lang::prelude::*;

use crate::adapters::collaborators::{period_accounts, PeriodAccounts};
use crate::constants::*;
use crate::engine::ledger::claimed_record;
use crate::engine::ClaimLedger;
use crate::error::CarbonRewardsError;
use crate::state::{ClaimRecord, LastClaimCursor};
use crate::utils::{create_pda_account, read_account, write_account};

/**
 * Claim ledger backed by program-owned PDAs
 *
 * ClaimRecord and LastClaimCursor accounts are created lazily on commit, so a
 * rejected claim leaves no account behind. The handler has already checked
 * every address against its PDA seeds.
 */
pub struct AccountLedger<'a, 'info> {
    farm_id: u64,
    cursor: &'a AccountInfo<'info>,
    cursor_bump: u8,
    periods: &'a [PeriodAccounts<'a, 'info>],
    payer: &'a AccountInfo<'info>,
    system_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> AccountLedger<'a, 'info> {
    pub fn new(
        farm_id: u64,
        cursor: &'a AccountInfo<'info>,
        cursor_bump: u8,
        periods: &'a [PeriodAccounts<'a, 'info>],
        payer: &'a AccountInfo<'info>,
        system_program: &'a AccountInfo<'info>,
    ) -> Self {
        Self {
            farm_id,
            cursor,
            cursor_bump,
            periods,
            payer,
            system_program,
        }
    }

    fn ensure_farm(&self, farm_id: u64) -> Result<()> {
        require!(
            farm_id == self.farm_id,
            CarbonRewardsError::InvalidBatchAccounts
        );
        Ok(())
    }
}

impl ClaimLedger for AccountLedger<'_, '_> {
    fn claim_record(&self, farm_id: u64, period: u64) -> Result<Option<ClaimRecord>> {
        self.ensure_farm(farm_id)?;
        let accounts = period_accounts(self.periods, period)?;
        read_account::<ClaimRecord>(accounts.claim_record, &crate::ID)
    }

    fn last_claim(&self, farm_id: u64) -> Result<Option<LastClaimCursor>> {
        self.ensure_farm(farm_id)?;
        read_account::<LastClaimCursor>(self.cursor, &crate::ID)
    }

    fn record_claim(
        &mut self,
        farm_id: u64,
        period: u64,
        sequestered_amount: u64,
        reward_amount: u64,
        block_height: u64,
    ) -> Result<()> {
        self.ensure_farm(farm_id)?;
        if let Some(existing) = self.claim_record(farm_id, period)? {
            require!(!existing.claimed, CarbonRewardsError::RewardAlreadyClaimed);
        }

        let accounts = period_accounts(self.periods, period)?;
        let farm_bytes = farm_id.to_le_bytes();

        if accounts.claim_record.data_is_empty() {
            let period_bytes = period.to_le_bytes();
            let bump = [accounts.claim_bump];
            let seeds: &[&[u8]] = &[CLAIM_SEED.as_bytes(), &farm_bytes, &period_bytes, &bump];
            create_pda_account(
                self.payer,
                accounts.claim_record,
                self.system_program,
                ClaimRecord::LEN,
                &[seeds],
            )?;
        }
        let mut record = claimed_record(
            farm_id,
            period,
            sequestered_amount,
            reward_amount,
            block_height,
        );
        record.bump = accounts.claim_bump;
        write_account(accounts.claim_record, &record)?;

        if self.cursor.data_is_empty() {
            let bump = [self.cursor_bump];
            let seeds: &[&[u8]] = &[CURSOR_SEED.as_bytes(), &farm_bytes, &bump];
            create_pda_account(
                self.payer,
                self.cursor,
                self.system_program,
                LastClaimCursor::LEN,
                &[seeds],
            )?;
        }
        write_account(
            self.cursor,
            &LastClaimCursor {
                bump: self.cursor_bump,
                farm_id,
                last_period: period,
                last_block: block_height,
            },
        )
    }
}
