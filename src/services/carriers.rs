//! Carrier catalog resolution for the carrier selector.

use crate::domain::carrier::CarrierOption;
use crate::repository::CarrierCatalogReader;
use crate::services::session::CarrierCatalog;

/// Fetches the catalog and maps each record to a selectable option.
///
/// A failed fetch degrades to [`CarrierCatalog::Unavailable`]: the selector
/// stays empty and no error reaches the user.
pub fn resolve_carrier_catalog<R>(repo: &R) -> CarrierCatalog
where
    R: CarrierCatalogReader + ?Sized,
{
    match repo.list_carriers() {
        Ok(records) => CarrierCatalog::Ready(
            records
                .iter()
                .filter_map(CarrierOption::from_record)
                .collect(),
        ),
        Err(err) => {
            log::warn!("Failed to load carrier catalog: {err}");
            CarrierCatalog::Unavailable
        }
    }
}
