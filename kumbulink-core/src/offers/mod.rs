pub mod client;
pub mod draft;
pub mod feed;
pub mod model;

pub use client::{ApiError, OffersClient};
pub use draft::NewOffer;
pub use feed::{OfferDetail, OfferFeed, OfferView};
pub use model::{filter_offers, ExchangeOffer, OfferFields, OfferRecord};
