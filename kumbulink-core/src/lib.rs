//! Domain core for the Kumbulink exchange-marketplace client.
//!
//! Everything here is UI-toolkit agnostic: the egui front-end renders these
//! types and dispatches into them, and the tests drive them directly.

pub mod config;
pub mod countries;
pub mod offers;
pub mod passport;
pub mod pointer;
pub mod registration;
pub mod routes;
pub mod runtime;
pub mod task;

pub use config::{ApiConfig, AppConfig, Config};
pub use countries::{Country, CountryId};
pub use offers::{ApiError, ExchangeOffer, NewOffer, OffersClient};
pub use passport::{is_valid_passport, is_valid_passport_for_name};
pub use routes::{Route, Session};
