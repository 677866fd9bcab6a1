// Resource records, drafts and patches as exchanged with the data service

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ResourceError;

/// Canonical id for every resource and every foreign key.
///
/// Data services disagree on whether ids are numbers or numeric strings, so
/// both are accepted on the way in. Ids always go out as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    // Text coming from form fields must pass through here before it is compared with anything
    pub fn parse(text: &str) -> Result<Self, ResourceError> {
        text.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| ResourceError::validation(format!("'{}' is not a valid id", text.trim())))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(u64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Ok(RecordId(n)),
            Wire::Text(text) => RecordId::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Destinations,
    Packages,
    Bookings,
    Itineraries,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Destinations,
        ResourceKind::Packages,
        ResourceKind::Bookings,
        ResourceKind::Itineraries,
    ];

    // REST collection root
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Destinations => "destinations",
            ResourceKind::Packages => "packages",
            ResourceKind::Bookings => "bookings",
            ResourceKind::Itineraries => "itineraries",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Destinations => "Destination",
            ResourceKind::Packages => "Package",
            ResourceKind::Bookings => "Booking",
            ResourceKind::Itineraries => "Itinerary",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// Foreign key fields, named after the resource they point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForeignKey {
    Destination,
    Package,
    Booking,
}

impl ForeignKey {
    // JSON field name, also used as the server-side query parameter
    pub fn field(self) -> &'static str {
        match self {
            ForeignKey::Destination => "destinationId",
            ForeignKey::Package => "packageId",
            ForeignKey::Booking => "bookingId",
        }
    }

    pub fn target(self) -> ResourceKind {
        match self {
            ForeignKey::Destination => ResourceKind::Destinations,
            ForeignKey::Package => ResourceKind::Packages,
            ForeignKey::Booking => ResourceKind::Bookings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub destination_id: RecordId,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: RecordId,
    pub package_id: RecordId,
    pub user_id: String,
    pub travelers: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
    // Snapshot taken at submit time, never recomputed from the package afterwards
    #[serde(default)]
    pub total_price: f64,
    pub booking_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time: String,
    pub activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Activity {
    // Rows without a time or a description are form leftovers
    pub fn is_blank(&self) -> bool {
        self.time.trim().is_empty() || self.activity.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: RecordId,
    pub booking_id: RecordId,
    pub destination_id: RecordId,
    pub day: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

// Drafts: create bodies, without an id

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub image: String,
    pub rating: f64,
    pub price: f64,
    pub duration: String,
    pub highlights: Vec<String>,
}

impl Default for DestinationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location: String::new(),
            image: String::new(),
            rating: 4.5,
            price: 0.0,
            duration: String::new(),
            highlights: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDraft {
    pub name: String,
    pub description: String,
    pub destination_id: RecordId,
    pub price: f64,
    pub duration: String,
    pub includes: Vec<String>,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub package_id: RecordId,
    pub user_id: String,
    pub travelers: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub total_price: f64,
    pub booking_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDraft {
    pub booking_id: RecordId,
    pub destination_id: RecordId,
    pub day: u32,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

impl ItineraryDraft {
    // Drops blank activity rows, the way the form submits them
    pub fn normalized(mut self) -> Self {
        self.activities.retain(|a| !a.is_blank());
        self
    }
}

// Patches: every field optional, absent fields are left untouched by the service

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
}

/// Checks run on drafts and patches before anything goes over the wire.
pub trait Validate {
    fn validate(&self) -> Result<(), ResourceError>;
}

fn require_text(field: &str, value: &str) -> Result<(), ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_price(field: &str, value: f64) -> Result<(), ResourceError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ResourceError::validation(format!(
            "{field} must be a non-negative amount, got {value}"
        )));
    }
    Ok(())
}

fn require_rating(value: f64) -> Result<(), ResourceError> {
    if !(0.0..=5.0).contains(&value) {
        return Err(ResourceError::validation(format!(
            "rating must be between 0 and 5, got {value}"
        )));
    }
    Ok(())
}

fn require_travelers(value: u32) -> Result<(), ResourceError> {
    if value < 1 {
        return Err(ResourceError::validation("travelers must be at least 1"));
    }
    Ok(())
}

fn require_day(value: u32) -> Result<(), ResourceError> {
    if value < 1 {
        return Err(ResourceError::validation("day must be at least 1"));
    }
    Ok(())
}

fn require_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), ResourceError> {
    if check_out < check_in {
        return Err(ResourceError::validation(format!(
            "check-out {check_out} is before check-in {check_in}"
        )));
    }
    Ok(())
}

fn require_activities(activities: &[Activity]) -> Result<(), ResourceError> {
    match activities.iter().position(Activity::is_blank) {
        Some(index) => Err(ResourceError::validation(format!(
            "activity #{} needs both a time and a description",
            index + 1
        ))),
        None => Ok(()),
    }
}

impl Validate for DestinationDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        require_text("name", &self.name)?;
        require_text("location", &self.location)?;
        require_rating(self.rating)?;
        require_price("price", self.price)
    }
}

impl Validate for DestinationPatch {
    fn validate(&self) -> Result<(), ResourceError> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(location) = &self.location {
            require_text("location", location)?;
        }
        if let Some(rating) = self.rating {
            require_rating(rating)?;
        }
        if let Some(price) = self.price {
            require_price("price", price)?;
        }
        Ok(())
    }
}

impl Validate for PackageDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        require_text("name", &self.name)?;
        require_price("price", self.price)
    }
}

impl Validate for PackagePatch {
    fn validate(&self) -> Result<(), ResourceError> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(price) = self.price {
            require_price("price", price)?;
        }
        Ok(())
    }
}

impl Validate for BookingDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        require_text("userId", &self.user_id)?;
        require_travelers(self.travelers)?;
        require_stay(self.check_in, self.check_out)?;
        require_price("totalPrice", self.total_price)
    }
}

impl Validate for BookingPatch {
    fn validate(&self) -> Result<(), ResourceError> {
        if let Some(user_id) = &self.user_id {
            require_text("userId", user_id)?;
        }
        if let Some(travelers) = self.travelers {
            require_travelers(travelers)?;
        }
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            require_stay(check_in, check_out)?;
        }
        if let Some(total) = self.total_price {
            require_price("totalPrice", total)?;
        }
        Ok(())
    }
}

impl Validate for ItineraryDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        require_day(self.day)?;
        require_activities(&self.activities)
    }
}

impl Validate for ItineraryPatch {
    fn validate(&self) -> Result<(), ResourceError> {
        if let Some(day) = self.day {
            require_day(day)?;
        }
        if let Some(activities) = &self.activities {
            require_activities(activities)?;
        }
        Ok(())
    }
}

/// A record kind served under its own REST root.
pub trait Resource: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: ResourceKind;

    type Draft: Validate + Serialize + fmt::Debug + Send + Sync + 'static;
    type Patch: Validate + Serialize + fmt::Debug + Send + Sync + 'static;

    fn id(&self) -> RecordId;

    fn foreign_key(&self, _key: ForeignKey) -> Option<RecordId> {
        None
    }
}

impl Resource for Destination {
    const KIND: ResourceKind = ResourceKind::Destinations;
    type Draft = DestinationDraft;
    type Patch = DestinationPatch;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Package {
    const KIND: ResourceKind = ResourceKind::Packages;
    type Draft = PackageDraft;
    type Patch = PackagePatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn foreign_key(&self, key: ForeignKey) -> Option<RecordId> {
        match key {
            ForeignKey::Destination => Some(self.destination_id),
            _ => None,
        }
    }
}

impl Resource for Booking {
    const KIND: ResourceKind = ResourceKind::Bookings;
    type Draft = BookingDraft;
    type Patch = BookingPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn foreign_key(&self, key: ForeignKey) -> Option<RecordId> {
        match key {
            ForeignKey::Package => Some(self.package_id),
            _ => None,
        }
    }
}

impl Resource for Itinerary {
    const KIND: ResourceKind = ResourceKind::Itineraries;
    type Draft = ItineraryDraft;
    type Patch = ItineraryPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn foreign_key(&self, key: ForeignKey) -> Option<RecordId> {
        match key {
            ForeignKey::Destination => Some(self.destination_id),
            ForeignKey::Booking => Some(self.booking_id),
            ForeignKey::Package => None,
        }
    }
}

// Comma separated form input ("Louvre, Eiffel Tower,,") into list items
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use tokio_test::{assert_err, assert_ok};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_record_id_accepts_numbers_and_numeric_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "8", " 9 "]"#).unwrap();
        assert_eq!(ids, vec![RecordId::new(7), RecordId::new(8), RecordId::new(9)]);

        assert!(serde_json::from_str::<RecordId>(r#""abc""#).is_err());
        assert_eq!(serde_json::to_string(&RecordId::new(8)).unwrap(), "8");
    }

    #[test_case("12", Some(12); "plain number")]
    #[test_case(" 3 ", Some(3); "surrounding whitespace")]
    #[test_case("", None; "empty field")]
    #[test_case("3.5", None; "fractional")]
    #[test_case("-1", None; "negative")]
    fn test_record_id_parse(input: &str, expected: Option<u64>) {
        assert_eq!(RecordId::parse(input).ok().map(RecordId::value), expected);
    }

    #[test]
    fn test_booking_round_trips_with_camel_case_fields() {
        let json = r#"{
            "id": "4",
            "packageId": 10,
            "userId": "user1",
            "travelers": 3,
            "checkIn": "2025-06-01",
            "checkOut": "2025-06-05",
            "status": "confirmed",
            "totalPrice": 1500,
            "bookingDate": "2025-05-20"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, RecordId::new(4));
        assert_eq!(booking.package_id, RecordId::new(10));
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.total_price, 1500.0);

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["packageId"], 10);
        assert_eq!(value["checkOut"], "2025-06-05");
    }

    #[test]
    fn test_destination_tolerates_missing_optional_fields() {
        let destination: Destination =
            serde_json::from_str(r#"{"id": 1, "name": "Paris"}"#).unwrap();
        assert_eq!(destination.name, "Paris");
        assert!(destination.highlights.is_empty());
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = PackagePatch {
            price: Some(650.0),
            available: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({"price": 650.0, "available": false}));
    }

    #[test_case(6.0, 100.0; "rating above five")]
    #[test_case(-0.5, 100.0; "negative rating")]
    #[test_case(4.0, -1.0; "negative price")]
    #[test_case(4.0, f64::NAN; "price not a number")]
    fn test_destination_draft_rejects_out_of_range(rating: f64, price: f64) {
        let draft = DestinationDraft {
            name: "Paris".to_string(),
            location: "France".to_string(),
            rating,
            price,
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(ResourceError::Validation(_))));
    }

    #[test]
    fn test_destination_draft_requires_name() {
        let draft = DestinationDraft {
            name: "   ".to_string(),
            location: "France".to_string(),
            ..Default::default()
        };
        assert_err!(draft.validate());
    }

    #[test]
    fn test_booking_draft_checks_stay_and_travelers() {
        let mut draft = BookingDraft {
            package_id: RecordId::new(10),
            user_id: "user1".to_string(),
            travelers: 2,
            check_in: date("2025-06-01"),
            check_out: date("2025-06-01"),
            status: BookingStatus::Pending,
            total_price: 1000.0,
            booking_date: date("2025-05-01"),
        };
        assert_ok!(draft.validate());

        draft.check_out = date("2025-05-30");
        assert_err!(draft.validate());

        draft.check_out = date("2025-06-03");
        draft.travelers = 0;
        assert_err!(draft.validate());
    }

    #[test]
    fn test_itinerary_draft_normalization_drops_blank_rows() {
        let draft = ItineraryDraft {
            booking_id: RecordId::new(7),
            destination_id: RecordId::new(1),
            day: 1,
            date: date("2025-06-02"),
            activities: vec![
                Activity {
                    time: "09:00".to_string(),
                    activity: "Louvre".to_string(),
                    location: Some("Rue de Rivoli".to_string()),
                },
                Activity {
                    time: "".to_string(),
                    activity: "Lunch".to_string(),
                    location: None,
                },
                Activity::default(),
            ],
        };
        assert_err!(draft.validate());

        let draft = draft.normalized();
        assert_eq!(draft.activities.len(), 1);
        assert_ok!(draft.validate());
    }

    #[test]
    fn test_patch_validation_only_checks_present_fields() {
        assert_ok!(DestinationPatch::default().validate());
        let patch = DestinationPatch {
            rating: Some(7.0),
            ..Default::default()
        };
        assert_err!(patch.validate());
        let patch = ItineraryPatch {
            day: Some(0),
            ..Default::default()
        };
        assert_err!(patch.validate());
    }

    #[test]
    fn test_split_list_trims_and_skips_empty_items() {
        assert_eq!(
            split_list("Louvre, Eiffel Tower,, Seine cruise ,"),
            vec!["Louvre", "Eiffel Tower", "Seine cruise"]
        );
        assert!(split_list("").is_empty());
        assert_eq!(
            join_list(&["Flights".to_string(), "Hotel".to_string()]),
            "Flights, Hotel"
        );
    }

    #[test]
    fn test_foreign_keys_per_resource() {
        let itinerary = Itinerary {
            id: RecordId::new(1),
            booking_id: RecordId::new(7),
            destination_id: RecordId::new(2),
            day: 1,
            date: date("2025-06-02"),
            activities: vec![],
        };
        assert_eq!(itinerary.foreign_key(ForeignKey::Booking), Some(RecordId::new(7)));
        assert_eq!(itinerary.foreign_key(ForeignKey::Destination), Some(RecordId::new(2)));
        assert_eq!(itinerary.foreign_key(ForeignKey::Package), None);
        assert_eq!(ForeignKey::Booking.field(), "bookingId");
        assert_eq!(ForeignKey::Booking.target(), ResourceKind::Bookings);
    }
}
