mod composite_service;
mod errors;

#[allow(unused_imports)]
pub use composite_service::{DEFAULT_PROVIDER_TIMEOUT, ServiceDependencies, get_book};
#[allow(unused_imports)]
pub use errors::{CompositeError, Result};
