//! Capability contracts. Each atomic trait carries one concern; the
//! composite traits only aggregate them.

pub trait SwitchOption {
    fn turn_on(&self);
    fn turn_off(&self);
}

pub trait ModeOption {
    fn change_mode(&self);
}

pub trait SpeedOption {
    fn change_fan_speed(&self);
}

pub trait HumidityOption {
    fn change_humidity(&self, level: i64);
}

pub trait Cost {
    /// Returns the price in whole currency units and announces it.
    fn price(&self) -> i64;
}

pub trait AutoOffOption {
    fn auto_shutdown_after(&self, minutes: i64);
}

/// Everything a standard unit offers. Conformance is declared per type.
pub trait StandardFeatures: SwitchOption + ModeOption + SpeedOption + HumidityOption + Cost {}

/// Standard features plus auto-shutdown.
pub trait EliteFeatures: StandardFeatures + AutoOffOption {}
