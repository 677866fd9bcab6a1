// Booking price computation. Pure functions, nothing here touches the network.

use std::fmt;

use crate::models::Package;
use crate::resolver::Resolved;

// Traveler counts below one (or missing) are treated as a single traveler
pub fn effective_travelers(travelers: Option<i64>) -> u32 {
    match travelers {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Total for `travelers` people at `unit_price` each.
///
/// The result is the raw product. Rounding to cents only happens when the
/// amount is displayed, see [`format_price`].
pub fn compute_total(unit_price: f64, travelers: Option<i64>) -> f64 {
    unit_price * f64::from(effective_travelers(travelers))
}

// A package that could not be resolved prices at zero
pub fn booking_total(package: Resolved<&Package>, travelers: Option<i64>) -> f64 {
    match package {
        Resolved::Found(package) => compute_total(package.price, travelers),
        Resolved::Unknown => 0.0,
    }
}

pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

// Unit price times travelers, as shown under the total on the booking form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub unit_price: f64,
    pub travelers: u32,
    pub total: f64,
}

impl PriceBreakdown {
    pub fn for_package(package: Resolved<&Package>, travelers: Option<i64>) -> Option<Self> {
        match package {
            Resolved::Found(package) => Some(Self {
                unit_price: package.price,
                travelers: effective_travelers(travelers),
                total: compute_total(package.price, travelers),
            }),
            Resolved::Unknown => None,
        }
    }
}

impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} x {} traveler(s)", self.unit_price, self.travelers)
    }
}
