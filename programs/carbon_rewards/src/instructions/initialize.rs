use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing the program
 *
 * Creates the configuration singleton. The signer becomes the owner; the
 * formula parameters start at their defaults (1.0x multiplier, 0.9x factor).
 *
 * Access Control: Anyone, once (the config PDA can only be created once)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Program configuration (PDA)
    /// - Derived from: ["config"]
    #[account(
        init,
        payer = owner,
        space = ProgramConfig::LEN,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    /// Mint authority (PDA)
    /// - Derived from: ["mint_authority"]
    /// - The reward token's mint authority must be set to this address
    /// CHECK: Only used for its address and bump; holds no data
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes()],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// The owner of the program
    /// - Pays for the configuration account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Initializes the program configuration
 *
 * @param ctx - The account context containing config, mint authority and owner accounts
 * @param collaborators - Token mint and collaborator program addresses
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    collaborators: CollaboratorAddresses,
) -> Result<()> {
    // Every collaborator must be set; a default key would reject every claim
    require!(
        collaborators.token_mint != Pubkey::default()
            && collaborators.metrics_program != Pubkey::default()
            && collaborators.verifier_program != Pubkey::default()
            && collaborators.governance_program != Pubkey::default(),
        CarbonRewardsError::InvalidParameter
    );

    let owner = ctx.accounts.owner.key();
    let config = &mut ctx.accounts.config;

    config.set_inner(ProgramConfig::new(owner, collaborators));
    config.bump = ctx.bumps.config;
    config.mint_authority_bump = ctx.bumps.mint_authority;

    msg!("carbon rewards initialized, owner={}", owner);

    emit_cpi!(ProgramInitialized {
        config: config.key(),
        owner,
        token_mint: collaborators.token_mint,
        metrics_program: collaborators.metrics_program,
        verifier_program: collaborators.verifier_program,
        governance_program: collaborators.governance_program,
    });

    Ok(())
}
