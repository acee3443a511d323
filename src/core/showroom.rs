use crate::app::products::{
    DiscountedAirConditioner, ExpensiveAirConditioner, FullPriceAirConditioner,
};
use crate::domain::ports::{
    AutoOffOption, Cost, HumidityOption, ModeOption, SpeedOption, SwitchOption,
};

/// Walks the three products through the fixed demo sequence.
pub fn run() {
    tracing::info!("Starting showroom demo");

    tracing::debug!("Full price unit");
    let full_price_ac = FullPriceAirConditioner::new();
    full_price_ac.change_humidity(10);
    full_price_ac.auto_shutdown_after(25);

    tracing::debug!("Expensive unit");
    let samsung_ac = ExpensiveAirConditioner::new();
    samsung_ac.turn_on();
    samsung_ac.change_mode();
    samsung_ac.change_humidity(13);
    samsung_ac.change_fan_speed();
    samsung_ac.auto_shutdown_after(60);

    tracing::debug!("Discounted unit wrapping the expensive one");
    let discounted_ac = DiscountedAirConditioner::new(&samsung_ac);
    let price = discounted_ac.price();
    tracing::debug!("Discounted price settled at {}", price);
    discounted_ac.change_humidity(5);

    tracing::info!("Showroom demo finished");
}
