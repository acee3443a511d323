use crate::core::console::announce;
use crate::core::controllers::{AutoOff, Humidity, Mode, Speed, Switch};
use crate::domain::model::{Announcement, PriceTag};
use crate::domain::ports::{
    AutoOffOption, Cost, EliteFeatures, HumidityOption, ModeOption, SpeedOption,
    StandardFeatures, SwitchOption,
};

pub const EXPENSIVE_PRICE: i64 = 1_950_000;

/// Elite unit owning one controller per capability.
///
/// Every capability is wired at construction, so each method is a plain
/// forward to its controller.
#[derive(Debug, Default)]
pub struct ExpensiveAirConditioner {
    switch_ctrl: Switch,
    mode_ctrl: Mode,
    speed_ctrl: Speed,
    humidity_ctrl: Humidity,
    auto_off_ctrl: AutoOff,
}

impl ExpensiveAirConditioner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SwitchOption for ExpensiveAirConditioner {
    fn turn_on(&self) {
        self.switch_ctrl.turn_on();
    }

    fn turn_off(&self) {
        self.switch_ctrl.turn_off();
    }
}

impl ModeOption for ExpensiveAirConditioner {
    fn change_mode(&self) {
        self.mode_ctrl.change_mode();
    }
}

impl SpeedOption for ExpensiveAirConditioner {
    fn change_fan_speed(&self) {
        self.speed_ctrl.change_fan_speed();
    }
}

impl HumidityOption for ExpensiveAirConditioner {
    fn change_humidity(&self, level: i64) {
        self.humidity_ctrl.change_humidity(level);
    }
}

impl Cost for ExpensiveAirConditioner {
    fn price(&self) -> i64 {
        announce(Announcement::Price {
            product: "ExpensiveAirConditioner",
            amount: PriceTag::Exact(EXPENSIVE_PRICE),
        });
        EXPENSIVE_PRICE
    }
}

impl AutoOffOption for ExpensiveAirConditioner {
    fn auto_shutdown_after(&self, minutes: i64) {
        self.auto_off_ctrl.auto_shutdown_after(minutes);
    }
}

impl StandardFeatures for ExpensiveAirConditioner {}
impl EliteFeatures for ExpensiveAirConditioner {}
