use anchor_lang::prelude::*;

use crate::constants::{BASE_REWARD_RATE, FIXED_POINT_SCALE};
use crate::error::CarbonRewardsError;

/**
 * Computes the reward for a sequestered amount
 *
 * @param sequestered - Sequestered amount (scale 1e6)
 * @param reward_multiplier - Multiplier (scale 1e6)
 * @param emission_reduction_factor - Emission-reduction factor (scale 1e6)
 *
 * Formula (each division truncates):
 * 1. base       = sequestered * BASE_REWARD_RATE
 * 2. multiplied = base * reward_multiplier / 1e6
 * 3. adjusted   = multiplied * emission_reduction_factor / 1e6
 *
 * Fails with CalculationOverflow when any stage overflows, when the result
 * does not fit a token amount, or when it truncates to zero.
 */
pub fn calculate_reward(
    sequestered: u64,
    reward_multiplier: u64,
    emission_reduction_factor: u64,
) -> Result<u64> {
    let base = u128::from(sequestered)
        .checked_mul(BASE_REWARD_RATE)
        .ok_or(CarbonRewardsError::CalculationOverflow)?;

    let multiplied = base
        .checked_mul(u128::from(reward_multiplier))
        .ok_or(CarbonRewardsError::CalculationOverflow)?
        / FIXED_POINT_SCALE;

    let adjusted = multiplied
        .checked_mul(u128::from(emission_reduction_factor))
        .ok_or(CarbonRewardsError::CalculationOverflow)?
        / FIXED_POINT_SCALE;

    require!(adjusted > 0, CarbonRewardsError::CalculationOverflow);

    u64::try_from(adjusted).map_err(|_| error!(CarbonRewardsError::CalculationOverflow))
}
