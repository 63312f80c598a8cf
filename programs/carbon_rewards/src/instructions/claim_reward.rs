use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::adapters::*;
use crate::constants::*;
use crate::engine::{ClaimEngine, ClaimReceipt};
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for claiming a period's reward
 *
 * The farm owner claims the reward for one verified measurement period. The
 * instruction checks pause state, ownership, verification, the sequestration
 * threshold, the farm cooldown and the per-period claim record, then records
 * the claim and mints the reward to the claimant.
 *
 * Access Control: Owner of the farm (per the metrics program)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(farm_id: u64, period: u64)]
pub struct ClaimReward<'info> {
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

    /// SoilMetrics for (farm_id, period) published by the metrics program
    /// CHECK: PDA address, owner, farm id and period are validated when read
    pub soil_metrics: UncheckedAccount<'info>,

    /// DataVerification for (farm_id, period) published by the verifier program
    /// CHECK: PDA address, owner, farm id and period are validated when read
    pub verification: UncheckedAccount<'info>,

    /// Claim record for this (farm, period)
    /// - Derived from: ["claim", farm_id, period]
    /// - Created on commit
    /// CHECK: Address fixed by seeds; contents read and written by the ledger adapter
    #[account(
        mut,
        seeds = [CLAIM_SEED.as_bytes(), farm_id.to_le_bytes().as_ref(), period.to_le_bytes().as_ref()],
        bump
    )]
    pub claim_record: UncheckedAccount<'info>,

    /// Last-claim cursor of the farm
    /// - Derived from: ["cursor", farm_id]
    /// - Created on the farm's first commit
    /// CHECK: Address fixed by seeds; contents read and written by the ledger adapter
    #[account(
        mut,
        seeds = [CURSOR_SEED.as_bytes(), farm_id.to_le_bytes().as_ref()],
        bump
    )]
    pub claim_cursor: UncheckedAccount<'info>,

    /// Reward token mint
    /// - Must match the configured token
    #[account(
        mut,
        mint::token_program = token_program,
        constraint = token_mint.key() == config.token_mint @ CarbonRewardsError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Mint authority (PDA)
    /// - Derived from: ["mint_authority"]
    /// CHECK: Address fixed by seeds; signs the mint CPI
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes()],
        bump = config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// Claimant's token account to receive the reward
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The farm owner claiming the reward
    /// - Pays for claim record and cursor creation
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims the reward of one (farm, period)
 *
 * @param ctx - The account context
 * @param farm_id - Farm being claimed for
 * @param period - Measurement period being claimed
 *
 * Any rejection returns an error and aborts the transaction.
 */
pub fn handle_claim_reward(ctx: Context<ClaimReward>, farm_id: u64, period: u64) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let claimant = ctx.accounts.claimant.key();

    let farm = ctx.accounts.farm.to_account_info();
    let soil_metrics = ctx.accounts.soil_metrics.to_account_info();
    let verification = ctx.accounts.verification.to_account_info();
    let claim_record = ctx.accounts.claim_record.to_account_info();
    let claim_cursor = ctx.accounts.claim_cursor.to_account_info();
    let payer = ctx.accounts.claimant.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();
    let token_mint = ctx.accounts.token_mint.to_account_info();
    let mint_authority = ctx.accounts.mint_authority.to_account_info();
    let destination = ctx.accounts.claimant_token_account.to_account_info();

    let periods = [PeriodAccounts {
        period,
        soil_metrics: &soil_metrics,
        verification: &verification,
        claim_record: &claim_record,
        claim_bump: ctx.bumps.claim_record,
    }];

    let config = &mut ctx.accounts.config;
    let collaborators = CollaboratorAccounts::new(
        config.metrics_program,
        config.verifier_program,
        &farm,
        &periods,
    );
    let mut ledger = AccountLedger::new(
        farm_id,
        &claim_cursor,
        ctx.bumps.claim_cursor,
        &periods,
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

    let receipt = ClaimEngine::new(
        config,
        &mut ledger,
        &collaborators,
        &collaborators,
        &mut minter,
    )
    .claim_reward(&claimant, farm_id, period, current_block)?;

    emit_cpi!(reward_claimed_event(&receipt));

    Ok(())
}

pub(crate) fn reward_claimed_event(receipt: &ClaimReceipt) -> RewardClaimed {
    RewardClaimed {
        farm_id: receipt.farm_id,
        period: receipt.period,
        claimant: receipt.claimant,
        sequestered_amount: receipt.sequestered_amount,
        reward_amount: receipt.reward_amount,
        claim_block: receipt.claim_block,
        total_rewards_distributed: receipt.total_rewards_distributed,
    }
}
