pub mod generate;
pub mod health;
pub mod index;

pub use generate::{generate_claim, ClaimState, SharedClaimState};
pub use health::health_check;
pub use index::index;
