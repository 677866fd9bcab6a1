// Client-side filtering: substring search and foreign key filters

use crate::models::{Booking, BookingStatus, Destination, ForeignKey, Itinerary, Package, RecordId, Resource};

/// Records that can be searched by text over a set of named fields.
pub trait Searchable {
    type Field: Copy;

    // Text for one field; a record may contribute several strings (e.g. one per activity)
    fn field_text(&self, field: Self::Field) -> Vec<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationField {
    Name,
    Location,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageField {
    Name,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    UserId,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryField {
    Activity,
    Location,
}

// Fields the list screens search by default
pub const DESTINATION_SEARCH_FIELDS: &[DestinationField] =
    &[DestinationField::Name, DestinationField::Location];
pub const PACKAGE_SEARCH_FIELDS: &[PackageField] = &[PackageField::Name, PackageField::Description];

impl Searchable for Destination {
    type Field = DestinationField;

    fn field_text(&self, field: DestinationField) -> Vec<&str> {
        match field {
            DestinationField::Name => vec![self.name.as_str()],
            DestinationField::Location => vec![self.location.as_str()],
            DestinationField::Description => vec![self.description.as_str()],
        }
    }
}

impl Searchable for Package {
    type Field = PackageField;

    fn field_text(&self, field: PackageField) -> Vec<&str> {
        match field {
            PackageField::Name => vec![self.name.as_str()],
            PackageField::Description => vec![self.description.as_str()],
        }
    }
}

impl Searchable for Booking {
    type Field = BookingField;

    fn field_text(&self, field: BookingField) -> Vec<&str> {
        match field {
            BookingField::UserId => vec![self.user_id.as_str()],
            BookingField::Status => vec![self.status.as_str()],
        }
    }
}

impl Searchable for Itinerary {
    type Field = ItineraryField;

    fn field_text(&self, field: ItineraryField) -> Vec<&str> {
        match field {
            ItineraryField::Activity => self.activities.iter().map(|a| a.activity.as_str()).collect(),
            ItineraryField::Location => self
                .activities
                .iter()
                .filter_map(|a| a.location.as_deref())
                .collect(),
        }
    }
}

/// Case-insensitive substring search. A record matches when any of `fields`
/// contains `term`. An empty term returns every record, in order.
pub fn search<'a, T: Searchable>(records: &'a [T], term: &str, fields: &[T::Field]) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            fields.iter().any(|&field| {
                record
                    .field_text(field)
                    .iter()
                    .any(|text| text.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

// Exact match on a foreign key, relative order preserved
pub fn filter_by_foreign_key<R: Resource>(records: &[R], key: ForeignKey, id: RecordId) -> Vec<&R> {
    records
        .iter()
        .filter(|record| record.foreign_key(key) == Some(id))
        .collect()
}

pub fn packages_for_destination(packages: &[Package], destination_id: RecordId) -> Vec<&Package> {
    filter_by_foreign_key(packages, ForeignKey::Destination, destination_id)
}

pub fn itineraries_for_booking(itineraries: &[Itinerary], booking_id: RecordId) -> Vec<&Itinerary> {
    filter_by_foreign_key(itineraries, ForeignKey::Booking, booking_id)
}

// Only available packages can be booked
pub fn bookable(packages: &[Package]) -> Vec<&Package> {
    packages.iter().filter(|p| p.available).collect()
}

pub fn with_status(bookings: &[Booking], status: BookingStatus) -> Vec<&Booking> {
    bookings.iter().filter(|b| b.status == status).collect()
}

pub fn featured(destinations: &[Destination], count: usize) -> &[Destination] {
    &destinations[..destinations.len().min(count)]
}
