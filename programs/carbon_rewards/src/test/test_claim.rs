#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::constants::*;
    use crate::engine::ClaimLedger;
    use crate::error::CarbonRewardsError;
    use crate::test::fakes::*;

    const FARM: u64 = 1;
    const PERIOD: u64 = 1;
    const REWARD_FOR_TWO_UNITS: u64 = 1_800_000_000_000;

    fn verified_farm() -> (Harness, Pubkey) {
        let mut harness = Harness::new();
        let farmer = harness.farmer(FARM);
        harness.verified_period(FARM, PERIOD, 2_000_000);
        (harness, farmer)
    }

    #[test]
    fn test_verified_claim_mints_reward() {
        let (mut harness, farmer) = verified_farm();

        let receipt = harness.claim(&farmer, FARM, PERIOD, 500).unwrap();

        assert_eq!(receipt.reward_amount, REWARD_FOR_TWO_UNITS);
        assert_eq!(receipt.sequestered_amount, 2_000_000);
        assert_eq!(receipt.claim_block, 500);
        assert_eq!(receipt.total_rewards_distributed, REWARD_FOR_TWO_UNITS);
        assert_eq!(harness.config.total_rewards_distributed, REWARD_FOR_TWO_UNITS);
        assert_eq!(harness.minter.minted, vec![(farmer, REWARD_FOR_TWO_UNITS)]);

        let record = harness.ledger.claim_record(FARM, PERIOD).unwrap().unwrap();
        assert!(record.claimed);
        assert_eq!(record.reward_amount, REWARD_FOR_TWO_UNITS);
        assert_eq!(record.claim_time, 500);

        let cursor = harness.ledger.last_claim(FARM).unwrap().unwrap();
        assert_eq!(cursor.last_period, PERIOD);
        assert_eq!(cursor.last_block, 500);
    }

    #[test]
    fn test_paused_rejects_every_claim() {
        let (mut harness, farmer) = verified_farm();
        harness.config.paused = true;

        assert_rejected(
            harness.claim(&farmer, FARM, PERIOD, 0),
            CarbonRewardsError::Paused,
        );
        // Even a claim that would fail every other check
        assert_rejected(
            harness.claim(&Pubkey::new_unique(), 99, 99, 0),
            CarbonRewardsError::Paused,
        );
        assert!(harness.minter.minted.is_empty());
    }

    #[test]
    fn test_unregistered_farm_is_invalid() {
        let (mut harness, farmer) = verified_farm();
        assert_rejected(
            harness.claim(&farmer, 2, PERIOD, 0),
            CarbonRewardsError::InvalidFarm,
        );
    }

    #[test]
    fn test_only_farm_owner_can_claim() {
        let (mut harness, _) = verified_farm();
        let other_farmer = harness.farmer(2);

        assert_rejected(
            harness.claim(&other_farmer, FARM, PERIOD, 0),
            CarbonRewardsError::Unauthorized,
        );
    }

    #[test]
    fn test_unverified_period_is_rejected() {
        let (mut harness, farmer) = verified_farm();
        // Reported but never verified; also below threshold, verification wins
        harness.metrics.report(FARM, 2, 10);

        assert_rejected(
            harness.claim(&farmer, FARM, 2, 0),
            CarbonRewardsError::UnverifiedData,
        );
    }

    #[test]
    fn test_sequestration_threshold_boundary() {
        let mut harness = Harness::new();
        let farmer = harness.farmer(FARM);
        harness.verified_period(FARM, 1, MIN_SEQUESTERED - 1);
        harness.verified_period(FARM, 2, MIN_SEQUESTERED);

        assert_rejected(
            harness.claim(&farmer, FARM, 1, 0),
            CarbonRewardsError::InsufficientSequestered,
        );

        let receipt = harness.claim(&farmer, FARM, 2, 0).unwrap();
        assert_eq!(receipt.reward_amount, 900_000_000_000);
    }

    #[test]
    fn test_second_claim_of_period_is_rejected() {
        let (mut harness, farmer) = verified_farm();
        harness.claim(&farmer, FARM, PERIOD, 0).unwrap();

        assert_rejected(
            harness.claim(&farmer, FARM, PERIOD, CLAIM_COOLDOWN),
            CarbonRewardsError::RewardAlreadyClaimed,
        );
        assert_rejected(
            harness.claim(&farmer, FARM, PERIOD, 10 * CLAIM_COOLDOWN),
            CarbonRewardsError::RewardAlreadyClaimed,
        );
        assert_eq!(harness.config.total_rewards_distributed, REWARD_FOR_TWO_UNITS);
        assert_eq!(harness.minter.minted.len(), 1);
    }

    #[test]
    fn test_cooldown_spans_periods() {
        let (mut harness, farmer) = verified_farm();
        harness.verified_period(FARM, 2, 2_000_000);

        let first = harness.claim(&farmer, FARM, PERIOD, 1_000).unwrap();

        assert_rejected(
            harness.claim(&farmer, FARM, 2, 1_000 + CLAIM_COOLDOWN - 1),
            CarbonRewardsError::CooldownNotMet,
        );

        let second = harness.claim(&farmer, FARM, 2, 1_000 + CLAIM_COOLDOWN).unwrap();
        assert!(second.claim_block - first.claim_block >= CLAIM_COOLDOWN);

        let cursor = harness.ledger.last_claim(FARM).unwrap().unwrap();
        assert_eq!(cursor.last_period, 2);
        assert_eq!(cursor.last_block, 1_000 + CLAIM_COOLDOWN);
    }

    #[test]
    fn test_cooldown_is_checked_before_claim_record() {
        let (mut harness, farmer) = verified_farm();
        harness.claim(&farmer, FARM, PERIOD, 0).unwrap();

        assert_rejected(
            harness.claim(&farmer, FARM, PERIOD, 1),
            CarbonRewardsError::CooldownNotMet,
        );
    }

    #[test]
    fn test_cooldown_is_per_farm() {
        let (mut harness, farmer) = verified_farm();
        let neighbour = harness.farmer(2);
        harness.verified_period(2, PERIOD, 2_000_000);

        harness.claim(&farmer, FARM, PERIOD, 0).unwrap();
        harness.claim(&neighbour, 2, PERIOD, 0).unwrap();

        assert_eq!(
            harness.config.total_rewards_distributed,
            2 * REWARD_FOR_TWO_UNITS
        );
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let (mut harness, farmer) = verified_farm();
        harness.claim(&farmer, FARM, PERIOD, 0).unwrap();
        harness.verified_period(FARM, 2, 2_000_000);

        let config_before = harness.config.clone();
        let ledger_before = harness.ledger.clone();

        assert_rejected(
            harness.claim(&farmer, FARM, 2, 100),
            CarbonRewardsError::CooldownNotMet,
        );
        assert_rejected(
            harness.claim(&Pubkey::new_unique(), FARM, 2, 1_000),
            CarbonRewardsError::Unauthorized,
        );

        assert_eq!(harness.config, config_before);
        assert_eq!(harness.ledger, ledger_before);
        assert_eq!(harness.minter.minted.len(), 1);
    }

    #[test]
    fn test_oversized_reward_is_rejected_without_writes() {
        let mut harness = Harness::new();
        let farmer = harness.farmer(FARM);
        harness.verified_period(FARM, PERIOD, u64::MAX);
        harness.config.reward_multiplier = MAX_REWARD_MULTIPLIER;

        assert_rejected(
            harness.claim(&farmer, FARM, PERIOD, 0),
            CarbonRewardsError::CalculationOverflow,
        );
        assert!(harness.ledger.records.is_empty());
        assert!(harness.ledger.cursors.is_empty());
        assert_eq!(harness.config.total_rewards_distributed, 0);
    }

    #[test]
    fn test_accumulator_overflow_is_rejected_without_writes() {
        let (mut harness, farmer) = verified_farm();
        harness.config.total_rewards_distributed = u64::MAX - 1;

        assert_rejected(
            harness.claim(&farmer, FARM, PERIOD, 0),
            CarbonRewardsError::CalculationOverflow,
        );
        assert!(harness.ledger.records.is_empty());
        assert_eq!(harness.config.total_rewards_distributed, u64::MAX - 1);
    }

    #[test]
    fn test_mint_failure_is_returned() {
        let (mut harness, farmer) = verified_farm();
        harness.minter.reject = true;

        let err = harness.claim(&farmer, FARM, PERIOD, 0).unwrap_err();
        assert_eq!(error_code(&err), None);
        assert!(harness.minter.minted.is_empty());
    }
}
