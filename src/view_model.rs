// Per-screen view model
//
// Owns the collection snapshots of one screen instance. Snapshots are never
// patched in place: every create/update/delete is followed by a full refetch
// of the affected collection.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use crate::client::ResourceClient;
use crate::error::ResourceError;
use crate::models::{
    Booking, BookingDraft, BookingPatch, BookingStatus, Destination, Itinerary, Package, RecordId,
    Resource, ResourceKind, Validate,
};
use crate::pricing::{booking_total, effective_travelers, PriceBreakdown};
use crate::query::{self, DESTINATION_SEARCH_FIELDS, PACKAGE_SEARCH_FIELDS};
use crate::resolver::{self, BookingRow, ItineraryRow, PackageRow, Resolved};

// Destinations shown on the home screen
pub const FEATURED_DESTINATIONS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Submitting,
    Done,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

// One-shot message for the rendering layer (toast)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn past(self) -> &'static str {
        match self {
            Mutation::Create => "created",
            Mutation::Update => "updated",
            Mutation::Delete => "deleted",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }
}

/// One collection snapshot and where its load stands.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    items: Vec<R>,
    state: LoadState,
    pending: usize,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Idle,
            pending: 0,
        }
    }
}

impl<R> Collection<R> {
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    fn begin(&mut self) {
        self.pending += 1;
        self.state = LoadState::Loading;
    }

    // Whichever fetch completes last decides the snapshot. The state only
    // settles once nothing else is in flight. A fetch started before mount
    // never took a pending slot, so it has none to give back.
    fn finish(&mut self, result: Result<Vec<R>, ResourceError>, counted: bool) {
        if counted {
            self.pending = self.pending.saturating_sub(1);
        }
        let settled = match result {
            Ok(items) => {
                self.items = items;
                LoadState::Ready
            }
            Err(err) => {
                // No partial data on a failed load
                self.items.clear();
                LoadState::Failed(err.to_string())
            }
        };
        self.state = if self.pending == 0 {
            settled
        } else {
            LoadState::Loading
        };
    }
}

#[derive(Debug, Default)]
pub struct Snapshots {
    pub destinations: Collection<Destination>,
    pub packages: Collection<Package>,
    pub bookings: Collection<Booking>,
    pub itineraries: Collection<Itinerary>,
}

impl Snapshots {
    fn state(&self, kind: ResourceKind) -> &LoadState {
        match kind {
            ResourceKind::Destinations => self.destinations.state(),
            ResourceKind::Packages => self.packages.state(),
            ResourceKind::Bookings => self.bookings.state(),
            ResourceKind::Itineraries => self.itineraries.state(),
        }
    }

    fn begin(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Destinations => self.destinations.begin(),
            ResourceKind::Packages => self.packages.begin(),
            ResourceKind::Bookings => self.bookings.begin(),
            ResourceKind::Itineraries => self.itineraries.begin(),
        }
    }
}

/// Resources that have a slot in [`Snapshots`].
pub trait Stored: Resource {
    fn slot(snapshots: &Snapshots) -> &Collection<Self>;
    fn slot_mut(snapshots: &mut Snapshots) -> &mut Collection<Self>;
}

macro_rules! stored {
    ($record:ty, $field:ident) => {
        impl Stored for $record {
            fn slot(snapshots: &Snapshots) -> &Collection<Self> {
                &snapshots.$field
            }

            fn slot_mut(snapshots: &mut Snapshots) -> &mut Collection<Self> {
                &mut snapshots.$field
            }
        }
    };
}

stored!(Destination, destinations);
stored!(Package, packages);
stored!(Booking, bookings);
stored!(Itinerary, itineraries);

// Handed out when a fetch starts. Results are only applied to the mount they
// were started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub kind: ResourceKind,
    epoch: u64,
    counted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    Discarded,
}

enum Fetched {
    Destinations(Result<Vec<Destination>, ResourceError>),
    Packages(Result<Vec<Package>, ResourceError>),
    Bookings(Result<Vec<Booking>, ResourceError>),
    Itineraries(Result<Vec<Itinerary>, ResourceError>),
}

async fn fetch<C: ResourceClient>(client: &C, ticket: RefreshTicket) -> (RefreshTicket, Fetched) {
    let fetched = match ticket.kind {
        ResourceKind::Destinations => Fetched::Destinations(client.list().await),
        ResourceKind::Packages => Fetched::Packages(client.list().await),
        ResourceKind::Bookings => Fetched::Bookings(client.list().await),
        ResourceKind::Itineraries => Fetched::Itineraries(client.list().await),
    };
    (ticket, fetched)
}

/// Booking form input. Travelers may be missing or invalid; it is coerced at submit.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub package_id: Option<RecordId>,
    pub user_id: String,
    pub travelers: Option<i64>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
}

impl BookingForm {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            package_id: None,
            user_id: "user1".to_string(),
            travelers: Some(1),
            check_in,
            check_out,
            status: BookingStatus::Pending,
        }
    }

    // Pre-fills the form from an existing booking for editing
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            package_id: Some(booking.package_id),
            user_id: booking.user_id.clone(),
            travelers: Some(i64::from(booking.travelers)),
            check_in: booking.check_in,
            check_out: booking.check_out,
            status: booking.status,
        }
    }

    fn package_id(&self) -> Result<RecordId, ResourceError> {
        self.package_id
            .ok_or_else(|| ResourceError::validation("a package must be selected"))
    }
}

pub struct ViewModel<C: ResourceClient> {
    client: Arc<C>,
    snapshots: Snapshots,
    epoch: u64,
    mounted: bool,
    mutation: MutationState,
    notices: VecDeque<Notice>,
}

impl<C: ResourceClient> ViewModel<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            snapshots: Snapshots::default(),
            epoch: 0,
            mounted: false,
            mutation: MutationState::Idle,
            notices: VecDeque::new(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Screen mount: loads every collection in `kinds` concurrently.
    pub async fn mount(&mut self, kinds: &[ResourceKind]) {
        self.mounted = true;
        self.refresh_all(kinds).await;
    }

    // Any results still in flight for this screen are dropped when they arrive
    pub fn unmount(&mut self) {
        debug!(epoch = self.epoch, "screen unmounted");
        self.mounted = false;
        self.epoch += 1;
        self.snapshots = Snapshots::default();
    }

    pub async fn refresh(&mut self, kind: ResourceKind) {
        self.refresh_all(&[kind]).await;
    }

    async fn refresh_all(&mut self, kinds: &[ResourceKind]) {
        let client = Arc::clone(&self.client);
        let mut pending: FuturesUnordered<_> = kinds
            .iter()
            .map(|&kind| fetch(client.as_ref(), self.begin_refresh(kind)))
            .collect();

        while let Some((ticket, fetched)) = pending.next().await {
            self.apply(ticket, fetched);
        }
    }

    pub fn begin_refresh(&mut self, kind: ResourceKind) -> RefreshTicket {
        debug!(resource = %kind, mounted = self.mounted, "load started");
        // Unmounted screens show no loading state
        if self.mounted {
            self.snapshots.begin(kind);
        }
        RefreshTicket {
            kind,
            epoch: self.epoch,
            counted: self.mounted,
        }
    }

    pub fn finish_refresh<R: Stored>(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<R>, ResourceError>,
    ) -> RefreshOutcome {
        if !self.mounted || ticket.epoch != self.epoch {
            debug!(resource = %ticket.kind, "load result discarded");
            return RefreshOutcome::Discarded;
        }
        match &result {
            Ok(items) => debug!(resource = %ticket.kind, count = items.len(), "load applied"),
            Err(err) => warn!(resource = %ticket.kind, error = %err, "load failed"),
        }
        R::slot_mut(&mut self.snapshots).finish(result, ticket.counted);
        RefreshOutcome::Applied
    }

    fn apply(&mut self, ticket: RefreshTicket, fetched: Fetched) -> RefreshOutcome {
        match fetched {
            Fetched::Destinations(result) => self.finish_refresh(ticket, result),
            Fetched::Packages(result) => self.finish_refresh(ticket, result),
            Fetched::Bookings(result) => self.finish_refresh(ticket, result),
            Fetched::Itineraries(result) => self.finish_refresh(ticket, result),
        }
    }

    pub fn state(&self, kind: ResourceKind) -> &LoadState {
        self.snapshots.state(kind)
    }

    pub fn collection<R: Stored>(&self) -> &Collection<R> {
        R::slot(&self.snapshots)
    }

    pub fn mutation_state(&self) -> &MutationState {
        &self.mutation
    }

    // Each mutation leaves exactly one notice behind
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub async fn create<R: Stored>(&mut self, draft: R::Draft) -> Result<R, ResourceError> {
        self.mutation = MutationState::Submitting;
        let result = match draft.validate() {
            Ok(()) => self.client.create::<R>(&draft).await,
            Err(err) => Err(err),
        };
        self.finish_mutation(Mutation::Create, R::KIND, result).await
    }

    pub async fn update<R: Stored>(&mut self, id: RecordId, patch: R::Patch) -> Result<R, ResourceError> {
        self.mutation = MutationState::Submitting;
        let result = match patch.validate() {
            Ok(()) => self.client.update::<R>(id, &patch).await,
            Err(err) => Err(err),
        };
        self.finish_mutation(Mutation::Update, R::KIND, result).await
    }

    // Deleting a referenced record leaves its dependents dangling; they resolve to Unknown
    pub async fn delete<R: Stored>(&mut self, id: RecordId) -> Result<(), ResourceError> {
        self.mutation = MutationState::Submitting;
        let result = self.client.delete::<R>(id).await;
        self.finish_mutation(Mutation::Delete, R::KIND, result).await
    }

    // Reports the outcome once. Success refetches the target collection,
    // failure leaves every snapshot as it was.
    async fn finish_mutation<T>(
        &mut self,
        mutation: Mutation,
        kind: ResourceKind,
        result: Result<T, ResourceError>,
    ) -> Result<T, ResourceError> {
        match &result {
            Ok(_) => {
                info!(resource = %kind, "{} {}", kind.label(), mutation.past());
                self.mutation = MutationState::Done;
                self.notices.push_back(Notice {
                    level: NoticeLevel::Success,
                    message: format!("{} {} successfully", kind.label(), mutation.past()),
                });
                self.refresh(kind).await;
            }
            Err(err) => {
                warn!(resource = %kind, error = %err, "failed to {} {}", mutation.verb(), kind.label());
                self.mutation = MutationState::Failed(err.to_string());
                self.notices.push_back(Notice {
                    level: NoticeLevel::Error,
                    message: format!(
                        "Failed to {} {}",
                        mutation.verb(),
                        kind.label().to_lowercase()
                    ),
                });
            }
        }
        result
    }

    /// Builds the create body for a booking. The total is a snapshot of the
    /// package price currently loaded, taken now.
    pub fn booking_draft(&self, form: &BookingForm, today: NaiveDate) -> Result<BookingDraft, ResourceError> {
        let package_id = form.package_id()?;
        let package = self.resolve_package(package_id);
        if let Resolved::Found(package) = package {
            if !package.available {
                return Err(ResourceError::validation(format!(
                    "package '{}' is not available for booking",
                    package.name
                )));
            }
        }

        Ok(BookingDraft {
            package_id,
            user_id: form.user_id.clone(),
            travelers: effective_travelers(form.travelers),
            check_in: form.check_in,
            check_out: form.check_out,
            status: form.status,
            total_price: booking_total(package, form.travelers),
            booking_date: today,
        })
    }

    pub async fn submit_booking(&mut self, form: &BookingForm) -> Result<Booking, ResourceError> {
        self.submit_booking_on(form, Local::now().date_naive()).await
    }

    pub async fn submit_booking_on(
        &mut self,
        form: &BookingForm,
        today: NaiveDate,
    ) -> Result<Booking, ResourceError> {
        match self.booking_draft(form, today) {
            Ok(draft) => self.create::<Booking>(draft).await,
            Err(err) => {
                self.mutation = MutationState::Submitting;
                self.finish_mutation(Mutation::Create, ResourceKind::Bookings, Err(err))
                    .await
            }
        }
    }

    // Editing re-snapshots the total at this submit. The patch never carries
    // bookingDate, so the date stays as created on a merging service.
    pub async fn update_booking(
        &mut self,
        id: RecordId,
        form: &BookingForm,
    ) -> Result<Booking, ResourceError> {
        let patch = form.package_id().map(|package_id| BookingPatch {
            package_id: Some(package_id),
            user_id: Some(form.user_id.clone()),
            travelers: Some(effective_travelers(form.travelers)),
            check_in: Some(form.check_in),
            check_out: Some(form.check_out),
            status: Some(form.status),
            total_price: Some(booking_total(self.resolve_package(package_id), form.travelers)),
        });
        match patch {
            Ok(patch) => self.update::<Booking>(id, patch).await,
            Err(err) => {
                self.mutation = MutationState::Submitting;
                self.finish_mutation(Mutation::Update, ResourceKind::Bookings, Err(err))
                    .await
            }
        }
    }

    // Derived views over the current snapshots

    pub fn destinations(&self) -> &[Destination] {
        self.snapshots.destinations.items()
    }

    pub fn packages(&self) -> &[Package] {
        self.snapshots.packages.items()
    }

    pub fn bookings(&self) -> &[Booking] {
        self.snapshots.bookings.items()
    }

    pub fn itineraries(&self) -> &[Itinerary] {
        self.snapshots.itineraries.items()
    }

    pub fn resolve_destination(&self, id: RecordId) -> Resolved<&Destination> {
        resolver::resolve_destination(id, self.destinations())
    }

    pub fn resolve_package(&self, id: RecordId) -> Resolved<&Package> {
        resolver::resolve_package(id, self.packages())
    }

    pub fn resolve_booking(&self, id: RecordId) -> Resolved<&Booking> {
        resolver::resolve_booking(id, self.bookings())
    }

    pub fn search_destinations(&self, term: &str) -> Vec<&Destination> {
        query::search(self.destinations(), term, DESTINATION_SEARCH_FIELDS)
    }

    pub fn search_packages(&self, term: &str) -> Vec<&Package> {
        query::search(self.packages(), term, PACKAGE_SEARCH_FIELDS)
    }

    pub fn featured_destinations(&self) -> &[Destination] {
        query::featured(self.destinations(), FEATURED_DESTINATIONS)
    }

    pub fn bookable_packages(&self) -> Vec<&Package> {
        query::bookable(self.packages())
    }

    pub fn packages_for_destination(&self, destination_id: RecordId) -> Vec<&Package> {
        query::packages_for_destination(self.packages(), destination_id)
    }

    pub fn itineraries_for_booking(&self, booking_id: RecordId) -> Vec<&Itinerary> {
        query::itineraries_for_booking(self.itineraries(), booking_id)
    }

    pub fn package_rows(&self) -> Vec<PackageRow<'_>> {
        resolver::package_rows(self.packages(), self.destinations())
    }

    pub fn booking_rows(&self) -> Vec<BookingRow<'_>> {
        resolver::booking_rows(self.bookings(), self.packages())
    }

    pub fn itinerary_rows(&self) -> Vec<ItineraryRow<'_>> {
        resolver::itinerary_rows(self.itineraries(), self.bookings(), self.destinations())
    }

    // Live total shown on the booking form before submit
    pub fn price_preview(&self, form: &BookingForm) -> Option<PriceBreakdown> {
        let package = self.resolve_package(form.package_id?);
        PriceBreakdown::for_package(package, form.travelers)
    }
}
