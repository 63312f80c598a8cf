use anchor_lang::prelude::*;

#[error_code]
pub enum CarbonRewardsError {
    // Access control errors
    #[msg("Caller is not authorized to perform this action")]
    Unauthorized,

    // Claim validation errors
    #[msg("Farm has no registered owner")]
    InvalidFarm,
    #[msg("Soil data for this period has not been verified")]
    UnverifiedData,
    #[msg("Sequestered amount is below the claim threshold")]
    InsufficientSequestered,
    #[msg("Reward for this period has already been claimed")]
    RewardAlreadyClaimed,
    #[msg("Claim cooldown has not elapsed for this farm")]
    CooldownNotMet,

    // Parameter errors
    #[msg("Parameter value is out of range")]
    InvalidParameter,

    // Program state errors
    #[msg("Program is paused")]
    Paused,
    #[msg("Reward calculation overflowed or collapsed to zero")]
    CalculationOverflow,

    // Account wiring errors
    #[msg("Batch exceeds the maximum number of periods")]
    BatchTooLarge,
    #[msg("Batch accounts do not match the requested periods")]
    InvalidBatchAccounts,
    #[msg("Collaborator account does not match the expected program or key")]
    CollaboratorMismatch,
    #[msg("Token mint does not match the configured reward token")]
    TokenMintMismatch,
}

impl CarbonRewardsError {
    /// Rejections produced by the claim state machine itself.
    /// A batch reports these as its outcome instead of aborting the transaction.
    pub const CLAIM_REJECTIONS: [CarbonRewardsError; 9] = [
        CarbonRewardsError::Unauthorized,
        CarbonRewardsError::InvalidFarm,
        CarbonRewardsError::UnverifiedData,
        CarbonRewardsError::InsufficientSequestered,
        CarbonRewardsError::RewardAlreadyClaimed,
        CarbonRewardsError::CooldownNotMet,
        CarbonRewardsError::InvalidParameter,
        CarbonRewardsError::Paused,
        CarbonRewardsError::CalculationOverflow,
    ];

    pub fn code(self) -> u32 {
        anchor_lang::error::ERROR_CODE_OFFSET + self as u32
    }

    pub fn is_claim_rejection(code: u32) -> bool {
        Self::CLAIM_REJECTIONS.iter().any(|rejection| rejection.code() == code)
    }
}
