//! Per-form session state: the draft, its errors, and the carrier catalog.

use crate::domain::carrier::CarrierOption;
use crate::forms::FieldErrors;
use crate::forms::shipment::ShipmentDraftForm;
use crate::repository::CarrierCatalogReader;
use crate::services::carriers;

/// Carrier catalog as seen by one form session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CarrierCatalog {
    /// Fetch not resolved yet; the selector is shown but nothing is
    /// selectable.
    #[default]
    Pending,
    Ready(Vec<CarrierOption>),
    /// Fetch failed; the selector stays empty.
    Unavailable,
}

/// In-memory state of one open creation form.
///
/// Created blank when the creation surface opens and discarded when it
/// closes. A successful create resets the draft while the session, and with
/// it the carrier catalog, lives on.
#[derive(Debug, Default)]
pub struct ShipmentFormSession {
    draft: ShipmentDraftForm,
    errors: FieldErrors,
    catalog: CarrierCatalog,
    submitting: bool,
}

impl ShipmentFormSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ShipmentDraftForm {
        &self.draft
    }

    /// Mutable access for field-by-field edits from the host UI.
    pub fn draft_mut(&mut self) -> &mut ShipmentDraftForm {
        &mut self.draft
    }

    /// Field errors left by the last failed validation.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn mbl_field_visible(&self) -> bool {
        self.draft.mbl_field_visible()
    }

    /// Whether a create call is in flight. The submit control should be
    /// disabled while this holds.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Resolves the carrier catalog, fetching at most once per session.
    pub fn ensure_carriers<R>(&mut self, repo: &R)
    where
        R: CarrierCatalogReader + ?Sized,
    {
        if matches!(self.catalog, CarrierCatalog::Pending) {
            self.catalog = carriers::resolve_carrier_catalog(repo);
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CarrierCatalog {
        &self.catalog
    }

    /// Selectable carrier options; empty while pending or unavailable.
    #[must_use]
    pub fn carrier_options(&self) -> &[CarrierOption] {
        match &self.catalog {
            CarrierCatalog::Ready(options) => options,
            CarrierCatalog::Pending | CarrierCatalog::Unavailable => &[],
        }
    }

    /// Marks a submit attempt as started; returns `false` when one is
    /// already in flight.
    pub(crate) fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub(crate) fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub(crate) fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub(crate) fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Discards the draft and its errors, keeping the carrier catalog.
    pub(crate) fn reset_draft(&mut self) {
        self.draft = ShipmentDraftForm::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::domain::carrier::Carrier;
    use crate::domain::shipment::TrackingMode;
    use crate::repository::errors::RepositoryResult;

    /// Catalog stub counting how often it is hit.
    struct CountingCatalog {
        calls: Cell<usize>,
    }

    impl CarrierCatalogReader for CountingCatalog {
        fn list_carriers(&self) -> RepositoryResult<Vec<Carrier>> {
            self.calls.set(self.calls.get() + 1);
            Ok(vec![Carrier {
                name: "Maersk".to_string(),
                scac_codes: vec!["MAEU".to_string()],
            }])
        }
    }

    #[test]
    fn catalog_is_fetched_once_per_session() {
        let repo = CountingCatalog { calls: Cell::new(0) };
        let mut session = ShipmentFormSession::new();
        assert!(session.carrier_options().is_empty());

        session.ensure_carriers(&repo);
        session.ensure_carriers(&repo);

        assert_eq!(repo.calls.get(), 1);
        assert_eq!(session.carrier_options().len(), 1);
        assert_eq!(session.carrier_options()[0].code, "MAEU");
    }

    #[test]
    fn mode_switch_is_non_destructive() {
        let mut session = ShipmentFormSession::new();
        session.draft_mut().track_with = TrackingMode::MblNumber;
        session.draft_mut().mbl_no = Some("MBL-7".to_string());

        session.draft_mut().track_with = TrackingMode::ContainerNumber;

        assert!(!session.mbl_field_visible());
        assert_eq!(session.draft().mbl_no.as_deref(), Some("MBL-7"));
    }

    #[test]
    fn submit_guard_refuses_reentry() {
        let mut session = ShipmentFormSession::new();

        assert!(session.begin_submit());
        assert!(session.is_submitting());
        assert!(!session.begin_submit());

        session.finish_submit();
        assert!(session.begin_submit());
    }
}
