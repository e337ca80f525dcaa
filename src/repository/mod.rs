use crate::domain::carrier::Carrier;
use crate::domain::shipment::{NewShipment, ShipmentReceipt};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Read access to the remote carrier catalog.
pub trait CarrierCatalogReader {
    fn list_carriers(&self) -> RepositoryResult<Vec<Carrier>>;
}

/// Write access to the shipment-creation endpoint.
pub trait ShipmentWriter {
    fn create_shipment(&self, new_shipment: &NewShipment) -> RepositoryResult<ShipmentReceipt>;
}
