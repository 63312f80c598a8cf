use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

/**
 * Account context for estimating a reward
 *
 * Read only: nothing is written, any signer (or a simulation) may call it.
 */
#[derive(Accounts)]
pub struct EstimateReward<'info> {
    /// Program configuration providing the live formula parameters
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,
}

/**
 * Returns the reward a claim of `sequestered` would mint right now
 *
 * @param ctx - The account context containing the config account
 * @param sequestered - Sequestered amount (scale 1e6)
 */
pub fn handle_estimate_reward(ctx: Context<EstimateReward>, sequestered: u64) -> Result<u64> {
    ctx.accounts.config.estimate_reward(sequestered)
}
