pub mod config_state;
pub mod claim_state;
pub mod cursor_state;
pub mod collaborator_state;

pub use config_state::*;
pub use claim_state::*;
pub use cursor_state::*;
pub use collaborator_state::*;
