use crate::core::console::announce;
use crate::core::controllers::{AutoOff, Humidity, Mode, Speed, Switch};
use crate::domain::model::{Announcement, PriceTag};
use crate::domain::ports::{
    AutoOffOption, Cost, HumidityOption, ModeOption, SpeedOption, StandardFeatures, SwitchOption,
};

pub const FULL_PRICE: i64 = 1_000_000;

/// Standard unit sold at list price.
///
/// Switch, mode and speed are built in. Humidity and auto-shutdown are
/// bolted on: a fresh controller is made for every call.
#[derive(Debug, Default)]
pub struct FullPriceAirConditioner {
    switch_controller: Switch,
    mode_controller: Mode,
    speed_controller: Speed,
}

impl FullPriceAirConditioner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SwitchOption for FullPriceAirConditioner {
    fn turn_on(&self) {
        self.switch_controller.turn_on();
    }

    fn turn_off(&self) {
        self.switch_controller.turn_off();
    }
}

impl ModeOption for FullPriceAirConditioner {
    fn change_mode(&self) {
        self.mode_controller.change_mode();
    }
}

impl SpeedOption for FullPriceAirConditioner {
    fn change_fan_speed(&self) {
        self.speed_controller.change_fan_speed();
    }
}

impl Cost for FullPriceAirConditioner {
    fn price(&self) -> i64 {
        // List price, no controller involved
        announce(Announcement::Price {
            product: "FullPriceAirConditioner",
            amount: PriceTag::Exact(FULL_PRICE),
        });
        FULL_PRICE
    }
}

impl HumidityOption for FullPriceAirConditioner {
    fn change_humidity(&self, level: i64) {
        // Extension capability: not held as a field, built per call
        let humidity_controller = Humidity;
        humidity_controller.change_humidity(level);
    }
}

impl AutoOffOption for FullPriceAirConditioner {
    fn auto_shutdown_after(&self, minutes: i64) {
        // Same as humidity: built on demand
        let auto_off_controller = AutoOff;
        auto_off_controller.auto_shutdown_after(minutes);
    }
}

// Has auto-off too, but is not an EliteFeatures product
impl StandardFeatures for FullPriceAirConditioner {}
