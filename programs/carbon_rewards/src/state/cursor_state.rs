use anchor_lang::prelude::*;

/**
 * Last-claim cursor
 *
 * Tracks the most recent successful claim of a farm, whatever its period.
 * The claim cooldown is measured from last_block.
 *
 * Derivation: ["cursor", farm_id]
 *
 * Lifecycle:
 * 1. Created on the farm's first successful claim
 * 2. Overwritten on every later successful claim
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct LastClaimCursor {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Farm this cursor belongs to
    pub farm_id: u64,

    /// Period of the most recent claim
    pub last_period: u64,

    /// Block height (slot) of the most recent claim
    /// - Never decreases
    pub last_block: u64,
}

impl LastClaimCursor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<LastClaimCursor>();
}
