use anchor_lang::prelude::*;

/**
 * Per-period claim record
 *
 * Records the outcome of a farm's claim for a single measurement period.
 *
 * Derivation: ["claim", farm_id, period]
 *
 * Lifecycle:
 * 1. Created on the first successful claim for (farm_id, period)
 * 2. Never updated once claimed, never closed
 *
 * Design Notes:
 * - One ClaimRecord account per (farm, period) pair
 * - Existence with claimed = true is the double-claim guard
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Farm this record belongs to
    pub farm_id: u64,

    /// Measurement period this record belongs to
    pub period: u64,

    /// Set on commit and never cleared
    pub claimed: bool,

    /// Sequestered amount reported at claim time (scale 1e6)
    pub sequestered_amount: u64,

    /// Reward minted for this period (scale 1e6)
    pub reward_amount: u64,

    /// Block height (slot) of the claim
    pub claim_time: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}
