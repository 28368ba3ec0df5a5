// Domain layer modules
pub mod envelope;
pub mod invocation_event;
pub mod lookup_outcome;
pub mod temperature;

// Re-exports
pub use envelope::{ErrorBody, ResultEnvelope, SuccessBody, TEMPERATURE_NOT_FOUND_MESSAGE};
pub use invocation_event::{CityQuery, InvocationEventError};
pub use lookup_outcome::LookupOutcome;
pub use temperature::extract_temperature;
