// Foreign key resolution and joined rows over loaded collections

use crate::models::{
    Activity, Booking, Destination, Itinerary, Package, RecordId, Resource,
};

/// Outcome of looking a foreign key up in a loaded collection.
///
/// `Unknown` is a displayable state. It covers dangling references left
/// behind by deletes as well as collections that have not loaded yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<T> {
    Found(T),
    Unknown,
}

impl<T> Resolved<T> {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Resolved::Unknown)
    }

    pub fn found(self) -> Option<T> {
        match self {
            Resolved::Found(value) => Some(value),
            Resolved::Unknown => None,
        }
    }

    pub fn as_ref(&self) -> Resolved<&T> {
        match self {
            Resolved::Found(value) => Resolved::Found(value),
            Resolved::Unknown => Resolved::Unknown,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Found(value) => Resolved::Found(f(value)),
            Resolved::Unknown => Resolved::Unknown,
        }
    }
}

impl<T> From<Option<T>> for Resolved<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Resolved::Unknown, Resolved::Found)
    }
}

// How a record is named when another record points at it
pub trait Labelled {
    const UNKNOWN_LABEL: &'static str;

    fn label(&self) -> String;
}

impl Labelled for Destination {
    const UNKNOWN_LABEL: &'static str = "Unknown Destination";

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Labelled for Package {
    const UNKNOWN_LABEL: &'static str = "Unknown Package";

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Labelled for Booking {
    const UNKNOWN_LABEL: &'static str = "Unknown Booking";

    fn label(&self) -> String {
        format!("Booking #{}", self.id)
    }
}

impl Labelled for Itinerary {
    const UNKNOWN_LABEL: &'static str = "Unknown Itinerary";

    fn label(&self) -> String {
        format!("Day {}", self.day)
    }
}

impl<T: Labelled> Resolved<&T> {
    pub fn label(&self) -> String {
        match self {
            Resolved::Found(record) => record.label(),
            Resolved::Unknown => T::UNKNOWN_LABEL.to_string(),
        }
    }
}

// Exact id match, first hit wins
pub fn resolve<R: Resource>(id: RecordId, records: &[R]) -> Resolved<&R> {
    records.iter().find(|record| record.id() == id).into()
}

pub fn resolve_destination(id: RecordId, destinations: &[Destination]) -> Resolved<&Destination> {
    resolve(id, destinations)
}

pub fn resolve_package(id: RecordId, packages: &[Package]) -> Resolved<&Package> {
    resolve(id, packages)
}

pub fn resolve_booking(id: RecordId, bookings: &[Booking]) -> Resolved<&Booking> {
    resolve(id, bookings)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageRow<'a> {
    pub package: &'a Package,
    pub destination: Resolved<&'a Destination>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow<'a> {
    pub booking: &'a Booking,
    pub package: Resolved<&'a Package>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryRow<'a> {
    pub itinerary: &'a Itinerary,
    pub booking: Resolved<&'a Booking>,
    pub destination: Resolved<&'a Destination>,
}

// Number of activities shown on an itinerary card
pub const ACTIVITY_PREVIEW_LEN: usize = 3;

impl<'a> ItineraryRow<'a> {
    pub fn activity_preview(&self) -> &'a [Activity] {
        let activities = &self.itinerary.activities;
        &activities[..activities.len().min(ACTIVITY_PREVIEW_LEN)]
    }

    // Activities hidden behind the "+N more activities" line
    pub fn hidden_activities(&self) -> usize {
        self.itinerary
            .activities
            .len()
            .saturating_sub(ACTIVITY_PREVIEW_LEN)
    }
}

pub fn package_rows<'a>(
    packages: &'a [Package],
    destinations: &'a [Destination],
) -> Vec<PackageRow<'a>> {
    packages
        .iter()
        .map(|package| PackageRow {
            package,
            destination: resolve_destination(package.destination_id, destinations),
        })
        .collect()
}

pub fn booking_rows<'a>(bookings: &'a [Booking], packages: &'a [Package]) -> Vec<BookingRow<'a>> {
    bookings
        .iter()
        .map(|booking| BookingRow {
            booking,
            package: resolve_package(booking.package_id, packages),
        })
        .collect()
}

// The itinerary's destination is not cross-checked against its booking's package
pub fn itinerary_rows<'a>(
    itineraries: &'a [Itinerary],
    bookings: &'a [Booking],
    destinations: &'a [Destination],
) -> Vec<ItineraryRow<'a>> {
    itineraries
        .iter()
        .map(|itinerary| ItineraryRow {
            itinerary,
            booking: resolve_booking(itinerary.booking_id, bookings),
            destination: resolve_destination(itinerary.destination_id, destinations),
        })
        .collect()
}
