use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the carbon rewards program.
 * These constants control the reward formula, claim cadence, parameter bounds and PDA derivation.
 */

#[constant]
/// ===== FIXED-POINT CONSTANTS =====

/// Fixed-point scale shared by amounts, the multiplier and the emission factor
/// - A nominal value of 1.0 is stored as 1,000,000
/// - Every multiplication stage divides by this scale with truncation
pub const FIXED_POINT_SCALE: u128 = 1_000_000;

/// Base reward rate applied to the sequestered amount (1 token per unit before tuning)
pub const BASE_REWARD_RATE: u128 = 1_000_000;

/// ===== CLAIM CADENCE CONSTANTS =====

/// Minimum sequestered amount (scaled) required to claim a period
/// - Value: 1.0 unit of CO2-equivalent
pub const MIN_SEQUESTERED: u64 = 1_000_000;

/// Minimum block spacing between two successful claims of the same farm
/// - Farm scoped: applies across periods
pub const CLAIM_COOLDOWN: u64 = 144;

/// Maximum number of periods accepted by a single batch claim
pub const MAX_BATCH_PERIODS: usize = 10;

/// Number of remaining accounts supplied per period in a batch claim
/// - Order: [soil_metrics, verification, claim_record]
pub const ACCOUNTS_PER_PERIOD: usize = 3;

/// ===== PARAMETER BOUNDS =====

/// Upper bound of the reward multiplier (5.0x); the lower bound is exclusive zero
pub const MAX_REWARD_MULTIPLIER: u64 = 5_000_000;

/// Lower bound of the emission-reduction factor (0.5x)
pub const MIN_EMISSION_REDUCTION_FACTOR: u64 = 500_000;

/// Upper bound of the emission-reduction factor (1.0x)
pub const MAX_EMISSION_REDUCTION_FACTOR: u64 = 1_000_000;

/// Reward multiplier applied at initialization (1.0x)
pub const DEFAULT_REWARD_MULTIPLIER: u64 = 1_000_000;

/// Emission-reduction factor applied at initialization (0.9x)
pub const DEFAULT_EMISSION_REDUCTION_FACTOR: u64 = 900_000;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the program configuration PDA
/// - Used in: ["config"]
/// - Singleton holding parameters, collaborator addresses and the reward accumulator
pub const CONFIG_SEED: &str = "config";

/// Seed for the mint authority PDA
/// - Used in: ["mint_authority"]
/// - Must be the mint authority of the configured reward token
pub const MINT_AUTHORITY_SEED: &str = "mint_authority";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", farm_id, period]
/// - One record per (farm, period); prevents double-claiming
pub const CLAIM_SEED: &str = "claim";

/// Seed for last-claim cursor PDA derivation
/// - Used in: ["cursor", farm_id]
/// - Tracks the block of the farm's most recent claim for cooldown checks
pub const CURSOR_SEED: &str = "cursor";

/// ===== COLLABORATOR SEED CONSTANTS =====

/// Seed of FarmRecord PDAs under the metrics program
/// - Used in: ["farm", farm_id]
pub const FARM_SEED: &str = "farm";

/// Seed of SoilMetrics PDAs under the metrics program
/// - Used in: ["soil_metrics", farm_id, period]
pub const SOIL_METRICS_SEED: &str = "soil_metrics";

/// Seed of DataVerification PDAs under the verifier program
/// - Used in: ["verification", farm_id, period]
pub const VERIFICATION_SEED: &str = "verification";

/// Seed of the GovernanceState singleton under the governance program
/// - Used in: ["governance"]
pub const GOVERNANCE_SEED: &str = "governance";
