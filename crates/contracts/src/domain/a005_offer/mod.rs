pub mod aggregate;
mod mock_data;

pub use aggregate::{DiscountType, Offer, OfferDto, OfferField, OfferStatus, ALL_PRODUCTS, OFFER_SCOPES};
pub use mock_data::mock_offers;
