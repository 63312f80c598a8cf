use anchor_lang::prelude::*;

use crate::constants::*;
use crate::engine::collaborators::GovernanceOracle;
use crate::error::CarbonRewardsError;
use crate::state::{CollaboratorKind, ProgramConfig};

/**
 * Admin gate
 *
 * Returns whether `caller` may change the program configuration.
 *
 * @param config - Current program configuration
 * @param caller - Signer of the admin instruction
 * @param dao - Governance collaborator; Some admits the DAO address as well as the owner
 *
 * The owner is checked first. The DAO address is only looked up when the
 * caller is not the owner, and is never cached, so a rotated DAO address
 * takes effect on the next call. A lookup that fails (missing, foreign or
 * misplaced governance state) leaves the caller unauthorized.
 */
pub fn is_authorized(
    config: &ProgramConfig,
    caller: &Pubkey,
    dao: Option<&dyn GovernanceOracle>,
) -> Result<bool> {
    if *caller == config.owner {
        return Ok(true);
    }
    match dao {
        Some(governance) => match governance.dao_address() {
            Ok(dao_address) => Ok(*caller == dao_address),
            Err(err) => {
                msg!("dao lookup failed: {}", err);
                Ok(false)
            }
        },
        None => Ok(false),
    }
}

fn ensure_authorized(
    config: &ProgramConfig,
    caller: &Pubkey,
    dao: Option<&dyn GovernanceOracle>,
) -> Result<()> {
    require!(
        is_authorized(config, caller, dao)?,
        CarbonRewardsError::Unauthorized
    );
    Ok(())
}

/// Replaces a collaborator address. Owner only.
/// Returns the previous address.
pub fn set_collaborator_address(
    config: &mut ProgramConfig,
    caller: &Pubkey,
    kind: CollaboratorKind,
    address: Pubkey,
) -> Result<Pubkey> {
    ensure_authorized(config, caller, None)?;

    let slot = config.collaborator_mut(kind);
    let previous = *slot;
    *slot = address;

    msg!("collaborator {:?}: {} -> {}", kind, previous, address);
    Ok(previous)
}

/// Sets the global pause flag. Owner only.
pub fn set_paused(config: &mut ProgramConfig, caller: &Pubkey, paused: bool) -> Result<()> {
    ensure_authorized(config, caller, None)?;

    config.paused = paused;

    msg!("paused = {}", paused);
    Ok(())
}

/// Updates the reward multiplier. Owner or DAO; value in (0, 5_000_000].
/// Returns the previous multiplier.
pub fn update_reward_multiplier(
    config: &mut ProgramConfig,
    caller: &Pubkey,
    governance: &dyn GovernanceOracle,
    value: u64,
) -> Result<u64> {
    ensure_authorized(config, caller, Some(governance))?;
    require!(
        value > 0 && value <= MAX_REWARD_MULTIPLIER,
        CarbonRewardsError::InvalidParameter
    );

    let previous = config.reward_multiplier;
    config.reward_multiplier = value;

    msg!("reward multiplier: {} -> {}", previous, value);
    Ok(previous)
}

/// Updates the emission-reduction factor. Owner or DAO; value in [500_000, 1_000_000].
/// Returns the previous factor.
pub fn update_emission_factor(
    config: &mut ProgramConfig,
    caller: &Pubkey,
    governance: &dyn GovernanceOracle,
    value: u64,
) -> Result<u64> {
    ensure_authorized(config, caller, Some(governance))?;
    require!(
        (MIN_EMISSION_REDUCTION_FACTOR..=MAX_EMISSION_REDUCTION_FACTOR).contains(&value),
        CarbonRewardsError::InvalidParameter
    );

    let previous = config.emission_reduction_factor;
    config.emission_reduction_factor = value;

    msg!("emission reduction factor: {} -> {}", previous, value);
    Ok(previous)
}
