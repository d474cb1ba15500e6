//! SeaORM query functions, one module per aggregate.
//!
//! Adapters return `DbErr`; the repos layer maps to `DomainError`.

pub mod bonuses_sea;
pub mod casinos_sea;
pub mod countries_sea;
pub mod licenses_sea;
