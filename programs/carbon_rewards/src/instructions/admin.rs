use anchor_lang::prelude::*;

use crate::constants::*;
use crate::engine::admin;
use crate::event::*;
use crate::state::*;

/**
 * Account context for owner-only configuration changes
 *
 * Shared by set_collaborator_address, pause and unpause. The signer is
 * checked by the admin gate, not by an account constraint, so a rejected
 * call fails with Unauthorized.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ConfigAuthority<'info> {
    /// The program configuration to update
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,

    /// Signer requesting the change
    pub authority: Signer<'info>,
}

/**
 * Replaces one collaborator address
 *
 * @param ctx - The account context containing config and authority accounts
 * @param kind - Which collaborator to replace
 * @param address - New collaborator address
 */
pub fn handle_set_collaborator_address(
    ctx: Context<ConfigAuthority>,
    kind: CollaboratorKind,
    address: Pubkey,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let previous =
        admin::set_collaborator_address(&mut ctx.accounts.config, &authority, kind, address)?;

    emit_cpi!(CollaboratorUpdated {
        kind,
        previous,
        address,
    });

    Ok(())
}

/// Halts all claims
pub fn handle_pause(ctx: Context<ConfigAuthority>) -> Result<()> {
    set_pause_state(ctx, true)
}

/// Resumes claims
pub fn handle_unpause(ctx: Context<ConfigAuthority>) -> Result<()> {
    set_pause_state(ctx, false)
}

fn set_pause_state(ctx: Context<ConfigAuthority>, paused: bool) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    admin::set_paused(&mut ctx.accounts.config, &authority, paused)?;

    emit_cpi!(PauseStateChanged { authority, paused });

    Ok(())
}
