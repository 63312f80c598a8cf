use anchor_lang::prelude::*;

use crate::constants::MINT_AUTHORITY_SEED;
use crate::engine::TokenMinter;
use crate::error::CarbonRewardsError;
use crate::utils::mint_token;

/// Mints rewards through the token program, signed by the mint authority PDA
pub struct CpiMinter<'a, 'info> {
    pub token_program: &'a AccountInfo<'info>,
    pub mint: &'a AccountInfo<'info>,
    /// Token account receiving the reward
    pub destination: &'a AccountInfo<'info>,
    /// Authority of `destination`, validated by the account constraints
    pub destination_owner: Pubkey,
    pub authority: &'a AccountInfo<'info>,
    pub authority_bump: u8,
}

impl TokenMinter for CpiMinter<'_, '_> {
    fn mint(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            *recipient,
            self.destination_owner,
            CarbonRewardsError::Unauthorized
        );

        let bump = [self.authority_bump];
        let seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED.as_bytes(), &bump];

        mint_token(
            self.authority.clone(),
            self.mint.clone(),
            self.destination.clone(),
            self.token_program.clone(),
            amount,
            &[seeds],
        )
    }
}
