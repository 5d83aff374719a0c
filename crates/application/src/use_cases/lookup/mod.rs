mod answer;
mod request;
mod run_lookup;

pub use answer::LookupAnswer;
pub use request::LookupRequest;
pub use run_lookup::LookupUseCase;
