pub mod discounted;
pub mod expensive;
pub mod full_price;

pub use discounted::DiscountedAirConditioner;
pub use expensive::ExpensiveAirConditioner;
pub use full_price::FullPriceAirConditioner;
