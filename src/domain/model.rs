use std::fmt;

/// An amount shown in a price announcement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceTag {
    Exact(i64),
    /// Result of a price computation, shown before truncation.
    Computed(f64),
}

impl fmt::Display for PriceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTag::Exact(amount) => write!(f, "{}", amount),
            // Debug keeps the fractional part, so 1462500.0 stays a float on screen
            PriceTag::Computed(amount) => write!(f, "{:?}", amount),
        }
    }
}

/// Every console line the product line can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Announcement {
    TurnedOn,
    TurnedOff,
    ModeChanged,
    FanSpeedChanged,
    HumidityChanged(i64),
    AutoShutdownScheduled(i64),
    Price {
        product: &'static str,
        amount: PriceTag,
    },
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Announcement::TurnedOn => f.write_str("Turn on AC"),
            Announcement::TurnedOff => f.write_str("Turn off AC"),
            Announcement::ModeChanged => f.write_str("Mode has been changed"),
            Announcement::FanSpeedChanged => f.write_str("Fan speed changed"),
            Announcement::HumidityChanged(level) => {
                write!(f, "Humidity has been changed to {}", level)
            }
            Announcement::AutoShutdownScheduled(minutes) => {
                write!(f, "AC will shutdown in {} minutes", minutes)
            }
            Announcement::Price { product, amount } => {
                write!(f, "{} price =  {}", product, amount)
            }
        }
    }
}
