pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::products::{
    DiscountedAirConditioner, ExpensiveAirConditioner, FullPriceAirConditioner,
};
pub use utils::error::{AcError, Result};
