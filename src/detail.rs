// Detail screens: one primary record by id plus the records it points at

use tracing::warn;

use crate::client::ResourceClient;
use crate::error::ResourceError;
use crate::models::{Booking, Destination, ForeignKey, Itinerary, Package, RecordId, Resource};
use crate::resolver::Resolved;

#[derive(Debug, Clone, PartialEq)]
pub struct PackageDetail {
    pub package: Package,
    pub destination: Resolved<Destination>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDetail {
    pub destination: Destination,
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDetail {
    pub itinerary: Itinerary,
    pub destination: Resolved<Destination>,
    pub booking: Resolved<Booking>,
}

// A failed lookup of a referenced record degrades to Unknown
async fn referenced<C, R>(client: &C, id: RecordId) -> Resolved<R>
where
    C: ResourceClient,
    R: Resource,
{
    match client.get::<R>(id).await {
        Ok(record) => Resolved::Found(record),
        Err(err) => {
            warn!(resource = %R::KIND, id = id.value(), error = %err, "referenced record unavailable");
            Resolved::Unknown
        }
    }
}

pub async fn package_detail<C: ResourceClient>(
    client: &C,
    id: RecordId,
) -> Result<PackageDetail, ResourceError> {
    let package: Package = client.get(id).await?;
    let destination = referenced(client, package.destination_id).await;
    Ok(PackageDetail {
        package,
        destination,
    })
}

// Packages that fail to load leave the destination page with an empty list
pub async fn destination_detail<C: ResourceClient>(
    client: &C,
    id: RecordId,
) -> Result<DestinationDetail, ResourceError> {
    let destination: Destination = client.get(id).await?;
    let packages = client
        .list_by::<Package>(ForeignKey::Destination, id)
        .await
        .unwrap_or_else(|err| {
            warn!(destination = id.value(), error = %err, "packages for destination unavailable");
            Vec::new()
        });
    Ok(DestinationDetail {
        destination,
        packages,
    })
}

pub async fn itinerary_detail<C: ResourceClient>(
    client: &C,
    id: RecordId,
) -> Result<ItineraryDetail, ResourceError> {
    let itinerary: Itinerary = client.get(id).await?;
    let destination = referenced(client, itinerary.destination_id).await;
    let booking = referenced(client, itinerary.booking_id).await;
    Ok(ItineraryDetail {
        itinerary,
        destination,
        booking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock_service::MemoryDataService;
    use crate::resolver::fixtures::*;

    fn seeded() -> MemoryDataService {
        let service = MemoryDataService::new();
        service.seed(&[destination(1, "Paris", "France"), destination(2, "Kyoto", "Japan")]);
        service.seed(&[
            package(10, "Paris Getaway", 1, 500.0),
            package(11, "Kyoto Temples", 2, 900.0),
            package(12, "Paris Lights", 1, 650.0),
            package(13, "Orphan", 99, 100.0),
        ]);
        service.seed(&[booking(7, 10, 3)]);
        service.seed(&[itinerary(1, 7, 1, 1), itinerary(2, 70, 5, 2)]);
        service
    }

    #[tokio::test]
    async fn test_package_detail_resolves_destination() {
        let service = seeded();
        let detail = package_detail(&service, RecordId::new(10)).await.unwrap();
        assert_eq!(detail.destination.as_ref().label(), "Paris");

        let orphan = package_detail(&service, RecordId::new(13)).await.unwrap();
        assert_eq!(orphan.destination.as_ref().label(), "Unknown Destination");
    }

    #[tokio::test]
    async fn test_missing_primary_record_is_an_error() {
        let service = seeded();
        let err = package_detail(&service, RecordId::new(404)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_destination_detail_lists_its_packages() {
        let service = seeded();
        let detail = destination_detail(&service, RecordId::new(1)).await.unwrap();
        let ids: Vec<u64> = detail.packages.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[tokio::test]
    async fn test_itinerary_detail_with_dangling_references() {
        let service = seeded();
        let detail = itinerary_detail(&service, RecordId::new(1)).await.unwrap();
        assert_eq!(detail.booking.as_ref().label(), "Booking #7");
        assert_eq!(detail.destination.as_ref().label(), "Paris");

        let detail = itinerary_detail(&service, RecordId::new(2)).await.unwrap();
        assert!(detail.booking.is_unknown());
        assert!(detail.destination.is_unknown());
    }
}
