// Client-side aggregation layer for the tourist management data service:
// destinations, packages, bookings and itineraries joined into screen views

pub mod client;
pub mod detail;
pub mod error;
pub mod models;
pub mod pricing;
pub mod query;
pub mod resolver;
pub mod view_model;

// Re-export key types for convenience
pub use client::{ClientConfig, HttpResourceClient, ResourceClient};
pub use detail::{DestinationDetail, ItineraryDetail, PackageDetail};
pub use error::{ClientError, ResourceError};
pub use models::{
    Activity, Booking, BookingStatus, Destination, ForeignKey, Itinerary, Package, RecordId,
    Resource, ResourceKind,
};
pub use pricing::{compute_total, format_price, PriceBreakdown};
pub use query::{filter_by_foreign_key, search};
pub use resolver::Resolved;
pub use view_model::{BookingForm, LoadState, MutationState, Notice, ViewModel};
