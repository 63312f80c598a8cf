#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::constants::*;
    use crate::engine::admin;
    use crate::engine::calculator::calculate_reward;
    use crate::error::CarbonRewardsError;
    use crate::test::fakes::*;

    #[test]
    fn test_reward_at_default_parameters() {
        // 2.0 units at 1.0x multiplier and 0.9x factor
        let reward = calculate_reward(
            2_000_000,
            DEFAULT_REWARD_MULTIPLIER,
            DEFAULT_EMISSION_REDUCTION_FACTOR,
        )
        .unwrap();
        assert_eq!(reward, 1_800_000_000_000);
    }

    #[test]
    fn test_each_stage_truncates() {
        // base = 3_000_000
        // multiplied = 3_000_000 * 333_333 / 1e6 = 999_999
        // adjusted = 999_999 * 900_000 / 1e6 = 899_999.1 -> 899_999
        assert_eq!(calculate_reward(3, 333_333, 900_000).unwrap(), 899_999);
    }

    #[test]
    fn test_parameter_bounds_scale_reward() {
        assert_eq!(
            calculate_reward(MIN_SEQUESTERED, MAX_REWARD_MULTIPLIER, MAX_EMISSION_REDUCTION_FACTOR)
                .unwrap(),
            5_000_000_000_000
        );
        assert_eq!(
            calculate_reward(MIN_SEQUESTERED, 1, MIN_EMISSION_REDUCTION_FACTOR).unwrap(),
            500_000
        );
    }

    #[test]
    fn test_zero_reward_is_rejected() {
        assert_rejected(
            calculate_reward(0, DEFAULT_REWARD_MULTIPLIER, DEFAULT_EMISSION_REDUCTION_FACTOR),
            CarbonRewardsError::CalculationOverflow,
        );
        // 1 * 1e6 * 1 / 1e6 = 1, then 1 * 500_000 / 1e6 truncates to 0
        assert_rejected(
            calculate_reward(1, 1, MIN_EMISSION_REDUCTION_FACTOR),
            CarbonRewardsError::CalculationOverflow,
        );
    }

    #[test]
    fn test_reward_beyond_token_range_is_rejected() {
        assert_rejected(
            calculate_reward(u64::MAX, MAX_REWARD_MULTIPLIER, MAX_EMISSION_REDUCTION_FACTOR),
            CarbonRewardsError::CalculationOverflow,
        );
    }

    #[test]
    fn test_estimate_tracks_live_parameters() {
        let mut harness = Harness::new();
        let owner = harness.owner;
        let governance = FakeGovernance {
            dao: Pubkey::new_unique(),
        };

        assert_eq!(
            harness.config.estimate_reward(2_000_000).unwrap(),
            1_800_000_000_000
        );

        admin::update_reward_multiplier(&mut harness.config, &owner, &governance, 2_000_000)
            .unwrap();
        admin::update_emission_factor(&mut harness.config, &owner, &governance, 1_000_000)
            .unwrap();
        assert_eq!(
            harness.config.estimate_reward(2_000_000).unwrap(),
            4_000_000_000_000
        );

        // Estimating never touches the accumulator
        assert_eq!(harness.config.total_rewards_distributed, 0);
    }
}
