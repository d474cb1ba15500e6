pub mod path_params;
pub mod query;
pub mod site_context;

pub use path_params::{CasinoSlug, CountryCode, LicenseId};
