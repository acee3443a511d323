use crate::core::console::announce;
use crate::domain::model::Announcement;
use crate::domain::ports::{AutoOffOption, HumidityOption, ModeOption, SpeedOption, SwitchOption};

// Each controller covers exactly one capability and keeps no state; a call
// is one announcement and nothing else.

/// On/off switching.
#[derive(Debug, Default, Clone, Copy)]
pub struct Switch;

impl SwitchOption for Switch {
    fn turn_on(&self) {
        announce(Announcement::TurnedOn);
    }

    fn turn_off(&self) {
        announce(Announcement::TurnedOff);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Mode;

impl ModeOption for Mode {
    fn change_mode(&self) {
        announce(Announcement::ModeChanged);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Speed;

impl SpeedOption for Speed {
    fn change_fan_speed(&self) {
        announce(Announcement::FanSpeedChanged);
    }
}

/// Humidity target. Any level is accepted as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct Humidity;

impl HumidityOption for Humidity {
    fn change_humidity(&self, level: i64) {
        announce(Announcement::HumidityChanged(level));
    }
}

/// Shutdown timer in minutes, unchecked.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoOff;

impl AutoOffOption for AutoOff {
    fn auto_shutdown_after(&self, minutes: i64) {
        announce(Announcement::AutoShutdownScheduled(minutes));
    }
}
