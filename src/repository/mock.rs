//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::carrier::Carrier;
use crate::domain::shipment::{NewShipment, ShipmentReceipt};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CarrierCatalogReader, ShipmentWriter};

mock! {
    pub Repository {}

    impl CarrierCatalogReader for Repository {
        fn list_carriers(&self) -> RepositoryResult<Vec<Carrier>>;
    }

    impl ShipmentWriter for Repository {
        fn create_shipment(&self, new_shipment: &NewShipment) -> RepositoryResult<ShipmentReceipt>;
    }
}
