pub mod admin;
pub mod batch_claim_rewards;
pub mod claim_reward;
pub mod estimate_reward;
pub mod initialize;
pub mod update_parameter;

pub use admin::*;
pub use batch_claim_rewards::*;
pub use claim_reward::*;
pub use estimate_reward::*;
pub use initialize::*;
pub use update_parameter::*;
