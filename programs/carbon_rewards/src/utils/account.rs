use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::error::CarbonRewardsError;

/// Deserializes an account owned by `expected_owner`
/// - Returns None for an empty (never initialized) account
/// - Fails with CollaboratorMismatch when the account is owned by another program
pub fn read_account<T: AccountDeserialize>(
    info: &AccountInfo,
    expected_owner: &Pubkey,
) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    require_keys_eq!(
        *info.owner,
        *expected_owner,
        CarbonRewardsError::CollaboratorMismatch
    );

    let data = info.try_borrow_data()?;
    let value = T::try_deserialize(&mut data.as_ref())?;
    Ok(Some(value))
}

/// Fails with CollaboratorMismatch unless `info` is the PDA of `seeds` under `program`
pub fn require_pda_address(info: &AccountInfo, seeds: &[&[u8]], program: &Pubkey) -> Result<()> {
    let (expected, _) = Pubkey::find_program_address(seeds, program);
    require_keys_eq!(
        *info.key,
        expected,
        CarbonRewardsError::CollaboratorMismatch
    );
    Ok(())
}

/// Serializes `value` (discriminator included) into a program-owned account
pub fn write_account<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)
}

/// Creates a PDA owned by this program, funded by `payer`
///
/// Mirrors what Anchor's `init` does so PDAs can be created lazily, only when a
/// claim commits. A PDA that already holds lamports (pre-funded by a third
/// party) is topped up, allocated and assigned instead of created.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
