use anchor_lang::prelude::*;

use crate::adapters::GovernanceAccount;
use crate::constants::*;
use crate::engine::admin;
use crate::event::*;
use crate::state::*;

/**
 * Account context for tuning the reward formula
 *
 * The signer must be the owner or the DAO address currently published by the
 * governance program. The governance state is read on every call.
 *
 * Access Control: Owner or governance DAO
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateParameter<'info> {
    /// The program configuration to update
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,

    /// Governance state published by the governance program
    /// - Expected at ["governance"] under config.governance_program
    /// CHECK: Address and owner are validated when read; a mismatch leaves a non-owner unauthorized
    pub governance_state: UncheckedAccount<'info>,

    /// Owner or DAO signer
    pub authority: Signer<'info>,
}

/**
 * Updates the reward multiplier
 *
 * @param ctx - The account context containing config, governance state and authority
 * @param multiplier - New multiplier (scale 1e6), in (0, 5_000_000]
 */
pub fn handle_update_reward_multiplier(
    ctx: Context<UpdateParameter>,
    multiplier: u64,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let governance_state = ctx.accounts.governance_state.to_account_info();
    let governance = GovernanceAccount::new(ctx.accounts.config.governance_program, &governance_state);

    let previous = admin::update_reward_multiplier(
        &mut ctx.accounts.config,
        &authority,
        &governance,
        multiplier,
    )?;

    emit_cpi!(RewardMultiplierUpdated {
        authority,
        previous,
        multiplier,
    });

    Ok(())
}

/**
 * Updates the emission-reduction factor
 *
 * @param ctx - The account context containing config, governance state and authority
 * @param factor - New factor (scale 1e6), in [500_000, 1_000_000]
 */
pub fn handle_update_emission_factor(ctx: Context<UpdateParameter>, factor: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let governance_state = ctx.accounts.governance_state.to_account_info();
    let governance = GovernanceAccount::new(ctx.accounts.config.governance_program, &governance_state);

    let previous = admin::update_emission_factor(
        &mut ctx.accounts.config,
        &authority,
        &governance,
        factor,
    )?;

    emit_cpi!(EmissionFactorUpdated {
        authority,
        previous,
        factor,
    });

    Ok(())
}
