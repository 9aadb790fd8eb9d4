pub mod token_store;
pub mod state_store;

pub use token_store::*;
pub use state_store::*;
