use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::adapters::*;
use crate::constants::*;
use crate::engine::{ClaimEngine, ClaimReceipt};
use crate::error::*;
use crate::event::*;
use crate::instructions::claim_reward::reward_claimed_event;
use crate::state::*;

/// Result of a batch claim, returned as instruction return data
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BatchClaimOutcome {
    /// Sum of the rewards committed by this batch
    pub total_reward: u64,
    /// First period that was rejected, if any
    pub failed_period: Option<u64>,
    /// Error code of that rejection
    pub error_code: Option<u32>,
}

/**
 * Account context for claiming several periods of one farm
 *
 * Same shared accounts as claim_reward. The per-period accounts are passed
 * as remaining accounts, three per period, in the order of `periods`:
 * [soil_metrics, verification, claim_record (writable)]
 *
 * Access Control: Owner of the farm (per the metrics program)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(farm_id: u64)]
pub struct BatchClaimRewards<'info> {
    /// Program configuration
    /// - Will be modified to update total_rewards_distributed
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,

    /// FarmRecord published by the metrics program
    /// CHECK: PDA address, owner and farm id are validated when read
    pub farm: UncheckedAccount<'info>,

    /// Last-claim cursor of the farm
    /// - Derived from: ["cursor", farm_id]
    /// CHECK: Address fixed by seeds; contents read and written by the ledger adapter
    #[account(
        mut,
        seeds = [CURSOR_SEED.as_bytes(), farm_id.to_le_bytes().as_ref()],
        bump
    )]
    pub claim_cursor: UncheckedAccount<'info>,

    /// Reward token mint
    #[account(
        mut,
        mint::token_program = token_program,
        constraint = token_mint.key() == config.token_mint @ CarbonRewardsError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Mint authority (PDA)
    /// CHECK: Address fixed by seeds; signs the mint CPI
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes()],
        bump = config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// Claimant's token account to receive the rewards
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The farm owner claiming the rewards
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims up to MAX_BATCH_PERIODS periods of one farm in order
 *
 * @param ctx - The account context; per-period accounts in remaining_accounts
 * @param farm_id - Farm being claimed for
 * @param periods - Periods to claim, in order
 *
 * The batch stops at the first rejected period. Claims committed before it
 * stay committed, and the rejection is reported in the returned outcome
 * rather than as an instruction error. Wiring problems (bad account list,
 * undecodable accounts) still abort the whole transaction.
 */
pub fn handle_batch_claim_rewards<'info>(
    ctx: Context<'_, '_, 'info, 'info, BatchClaimRewards<'info>>,
    farm_id: u64,
    periods: Vec<u64>,
) -> Result<BatchClaimOutcome> {
    // ===== ACCOUNT WIRING =====

    let period_accounts = batch_period_accounts(farm_id, &periods, ctx.remaining_accounts)?;

    // ===== CLAIMS =====

    let current_block = Clock::get()?.slot;
    let claimant = ctx.accounts.claimant.key();

    let farm = ctx.accounts.farm.to_account_info();
    let claim_cursor = ctx.accounts.claim_cursor.to_account_info();
    let payer = ctx.accounts.claimant.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();
    let token_mint = ctx.accounts.token_mint.to_account_info();
    let mint_authority = ctx.accounts.mint_authority.to_account_info();
    let destination = ctx.accounts.claimant_token_account.to_account_info();

    let config = &mut ctx.accounts.config;
    let collaborators = CollaboratorAccounts::new(
        config.metrics_program,
        config.verifier_program,
        &farm,
        &period_accounts,
    );
    let mut ledger = AccountLedger::new(
        farm_id,
        &claim_cursor,
        ctx.bumps.claim_cursor,
        &period_accounts,
        &payer,
        &system_program,
    );
    let mut minter = CpiMinter {
        token_program: &token_program,
        mint: &token_mint,
        destination: &destination,
        destination_owner: claimant,
        authority: &mint_authority,
        authority_bump: config.mint_authority_bump,
    };

    let (result, committed) = {
        let mut engine = ClaimEngine::new(
            config,
            &mut ledger,
            &collaborators,
            &collaborators,
            &mut minter,
        );
        let result = engine.batch_claim_rewards(&claimant, farm_id, &periods, current_block);
        (result, engine.committed().to_vec())
    };

    // ===== OUTCOME =====

    let outcome = settle_batch(&periods, result, &committed)?;

    for receipt in &committed {
        emit_cpi!(reward_claimed_event(receipt));
    }
    emit_cpi!(BatchClaimSettled {
        farm_id,
        claimant,
        requested_periods: periods.len() as u8,
        committed_periods: committed.len() as u8,
        total_reward: outcome.total_reward,
        failed_period: outcome.failed_period,
        error_code: outcome.error_code,
    });

    Ok(outcome)
}

/**
 * Pairs each requested period with its remaining-account triple
 *
 * @param farm_id - Farm being claimed for
 * @param periods - Requested periods, in order
 * @param remaining - Remaining accounts, [soil_metrics, verification, claim_record] per period
 *
 * Fails with BatchTooLarge above MAX_BATCH_PERIODS, and with
 * InvalidBatchAccounts when the account count is off or a claim record is
 * not the writable ["claim", farm_id, period] PDA of this program.
 */
pub fn batch_period_accounts<'a, 'info>(
    farm_id: u64,
    periods: &[u64],
    remaining: &'a [AccountInfo<'info>],
) -> Result<Vec<PeriodAccounts<'a, 'info>>> {
    require!(
        periods.len() <= MAX_BATCH_PERIODS,
        CarbonRewardsError::BatchTooLarge
    );
    require!(
        remaining.len() == periods.len() * ACCOUNTS_PER_PERIOD,
        CarbonRewardsError::InvalidBatchAccounts
    );

    let farm_bytes = farm_id.to_le_bytes();
    let mut period_accounts = Vec::with_capacity(periods.len());
    for (period, chunk) in periods.iter().zip(remaining.chunks(ACCOUNTS_PER_PERIOD)) {
        let (expected, claim_bump) = Pubkey::find_program_address(
            &[CLAIM_SEED.as_bytes(), &farm_bytes, &period.to_le_bytes()],
            &crate::ID,
        );
        require_keys_eq!(
            chunk[2].key(),
            expected,
            CarbonRewardsError::InvalidBatchAccounts
        );
        require!(
            chunk[2].is_writable,
            CarbonRewardsError::InvalidBatchAccounts
        );

        period_accounts.push(PeriodAccounts {
            period: *period,
            soil_metrics: &chunk[0],
            verification: &chunk[1],
            claim_record: &chunk[2],
            claim_bump,
        });
    }
    Ok(period_accounts)
}

/**
 * Turns the engine's batch result into the instruction outcome
 *
 * @param periods - Requested periods, in order
 * @param result - Total of the batch, or the error of the first failing period
 * @param committed - Claims committed before the batch stopped
 *
 * A claim rejection becomes an Ok outcome carrying the committed total, the
 * rejected period and its error code, so earlier claims persist. Any other
 * error is returned as is and aborts the transaction.
 */
pub fn settle_batch(
    periods: &[u64],
    result: Result<u64>,
    committed: &[ClaimReceipt],
) -> Result<BatchClaimOutcome> {
    match result {
        Ok(total_reward) => Ok(BatchClaimOutcome {
            total_reward,
            failed_period: None,
            error_code: None,
        }),
        Err(Error::AnchorError(rejection))
            if CarbonRewardsError::is_claim_rejection(rejection.error_code_number) =>
        {
            let total_reward = committed
                .iter()
                .try_fold(0u64, |total, receipt| total.checked_add(receipt.reward_amount))
                .ok_or(CarbonRewardsError::CalculationOverflow)?;
            Ok(BatchClaimOutcome {
                total_reward,
                failed_period: periods.get(committed.len()).copied(),
                error_code: Some(rejection.error_code_number),
            })
        }
        Err(err) => Err(err),
    }
}
