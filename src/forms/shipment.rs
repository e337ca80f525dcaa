use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::shipment::{NewShipment, TrackingMode};

/// Message attached to an empty carrier selection.
pub const CARRIER_REQUIRED_MESSAGE: &str = "Carrier is required and cannot be empty";
/// Message attached to a follower entry that is not an email address.
pub const FOLLOWER_EMAIL_MESSAGE: &str = "Each follower must be a valid email address";

/// Editable draft backing the shipment creation form.
///
/// Both tracking identifiers are always present in the draft: switching
/// [`TrackingMode`] hides one of them but never clears it. The schema also
/// accepts an empty `container_no` even while it is the active identifier;
/// the surrounding copy treats it as required but the original rules do not,
/// and that lenience is kept rather than silently tightened.
#[derive(Clone, Debug, Default, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDraftForm {
    /// Which identifier is authoritative for tracking.
    #[serde(default)]
    pub track_with: TrackingMode,
    #[serde(default)]
    pub container_no: String,
    /// Only shown while tracking by MBL / Booking number.
    #[serde(default)]
    pub mbl_no: Option<String>,
    #[validate(length(min = 1, message = "Carrier is required and cannot be empty"))]
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = validate_followers))]
    #[serde(default)]
    pub followers: Vec<String>,
    #[serde(default)]
    pub reference_no: Option<String>,
}

impl ShipmentDraftForm {
    /// Whether the MBL / Booking-number input is presented.
    ///
    /// Display rule only: the hidden value stays in the draft.
    #[must_use]
    pub fn mbl_field_visible(&self) -> bool {
        self.track_with == TrackingMode::MblNumber
    }
}

/// Every follower entry must be a syntactically valid email address.
fn validate_followers(followers: &[String]) -> Result<(), ValidationError> {
    if followers.iter().all(|follower| follower.validate_email()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("email");
        error.message = Some(Cow::Borrowed(FOLLOWER_EMAIL_MESSAGE));
        Err(error)
    }
}

impl From<&ShipmentDraftForm> for NewShipment {
    /// Builds the create payload from an already-validated draft.
    fn from(form: &ShipmentDraftForm) -> Self {
        NewShipment {
            track_with: form.track_with,
            container_no: form.container_no.clone(),
            mbl_no: form.mbl_no.clone(),
            carrier: form.carrier.clone(),
            tags: form.tags.clone(),
            followers: form.followers.clone(),
            reference_no: form.reference_no.clone(),
        }
    }
}
