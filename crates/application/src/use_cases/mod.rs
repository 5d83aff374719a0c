pub mod lookup;

// Re-export use cases
pub use lookup::{LookupAnswer, LookupRequest, LookupUseCase};
