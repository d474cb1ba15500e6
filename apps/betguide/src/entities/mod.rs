pub mod bonuses;
pub mod casino_countries;
pub mod casino_features;
pub mod casino_game_providers;
pub mod casino_licenses;
pub mod casino_payment_methods;
pub mod casino_security_features;
pub mod casinos;
pub mod countries;
pub mod features;
pub mod game_providers;
pub mod license_player_protections;
pub mod license_pros_cons;
pub mod license_requirements;
pub mod licenses;
pub mod payment_methods;
pub mod pros_cons;
pub mod security_features;
pub mod support_channels;
pub mod supported_languages;

pub use bonuses::Entity as Bonuses;
pub use bonuses::Model as Bonus;
pub use casinos::Entity as Casinos;
pub use casinos::Model as Casino;
pub use countries::Entity as Countries;
pub use countries::Model as Country;
pub use licenses::Entity as Licenses;
pub use licenses::Model as License;
