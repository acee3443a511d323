pub mod console;
pub mod controllers;
pub mod showroom;

pub use crate::domain::model::{Announcement, PriceTag};
pub use crate::domain::ports::{
    AutoOffOption, Cost, EliteFeatures, HumidityOption, ModeOption, SpeedOption,
    StandardFeatures, SwitchOption,
};
pub use crate::utils::error::Result;
