use anchor_lang::prelude::*;

use crate::constants::GOVERNANCE_SEED;
use crate::engine::GovernanceOracle;
use crate::error::CarbonRewardsError;
use crate::state::GovernanceState;
use crate::utils::{read_account, require_pda_address};

/// Reads the DAO address from the governance program's state account
/// - The account must be the ["governance"] PDA of the governance program
pub struct GovernanceAccount<'a, 'info> {
    program: Pubkey,
    state: &'a AccountInfo<'info>,
}

impl<'a, 'info> GovernanceAccount<'a, 'info> {
    pub fn new(program: Pubkey, state: &'a AccountInfo<'info>) -> Self {
        Self { program, state }
    }
}

impl GovernanceOracle for GovernanceAccount<'_, '_> {
    fn dao_address(&self) -> Result<Pubkey> {
        require_pda_address(self.state, &[GOVERNANCE_SEED.as_bytes()], &self.program)?;
        let state = read_account::<GovernanceState>(self.state, &self.program)?
            .ok_or(CarbonRewardsError::CollaboratorMismatch)?;
        Ok(state.dao_address)
    }
}
