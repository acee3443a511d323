use crate::core::console::announce;
use crate::domain::model::{Announcement, PriceTag};
use crate::domain::ports::{
    Cost, EliteFeatures, HumidityOption, ModeOption, SpeedOption, StandardFeatures, SwitchOption,
};

pub const DISCOUNT_RATE: f64 = 0.75;

/// Sells a borrowed elite unit at a discount, as a standard unit.
///
/// Auto-shutdown is not forwarded even though the wrapped unit has it:
///
/// ```compile_fail
/// use solid_ac::app::products::{DiscountedAirConditioner, ExpensiveAirConditioner};
/// use solid_ac::domain::ports::AutoOffOption;
///
/// let elite = ExpensiveAirConditioner::new();
/// let discounted = DiscountedAirConditioner::new(&elite);
/// discounted.auto_shutdown_after(30);
/// ```
#[derive(Debug)]
pub struct DiscountedAirConditioner<'a, E: EliteFeatures + ?Sized> {
    ac_product: &'a E,
}

impl<'a, E: EliteFeatures + ?Sized> DiscountedAirConditioner<'a, E> {
    pub fn new(ac_product: &'a E) -> Self {
        Self { ac_product }
    }
}

// Switch, mode, speed and humidity go straight to the wrapped unit.
impl<E: EliteFeatures + ?Sized> SwitchOption for DiscountedAirConditioner<'_, E> {
    fn turn_on(&self) {
        self.ac_product.turn_on();
    }

    fn turn_off(&self) {
        self.ac_product.turn_off();
    }
}

impl<E: EliteFeatures + ?Sized> ModeOption for DiscountedAirConditioner<'_, E> {
    fn change_mode(&self) {
        self.ac_product.change_mode();
    }
}

impl<E: EliteFeatures + ?Sized> SpeedOption for DiscountedAirConditioner<'_, E> {
    fn change_fan_speed(&self) {
        self.ac_product.change_fan_speed();
    }
}

impl<E: EliteFeatures + ?Sized> HumidityOption for DiscountedAirConditioner<'_, E> {
    fn change_humidity(&self, level: i64) {
        self.ac_product.change_humidity(level);
    }
}

impl<E: EliteFeatures + ?Sized> Cost for DiscountedAirConditioner<'_, E> {
    fn price(&self) -> i64 {
        // The wrapped unit announces its own list price first
        let list_price = self.ac_product.price();
        let discounted_price = list_price as f64 * DISCOUNT_RATE;
        tracing::debug!(list_price, discounted_price, "Applying discount");

        announce(Announcement::Price {
            product: "DiscountedAirConditioner",
            amount: PriceTag::Computed(discounted_price),
        });
        // `as` truncates toward zero
        discounted_price as i64
    }
}

// No AutoOffOption impl: clients of the discounted unit only see the standard set
impl<E: EliteFeatures + ?Sized> StandardFeatures for DiscountedAirConditioner<'_, E> {}
