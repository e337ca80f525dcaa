use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Which identifier a shipment is tracked by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingMode {
    #[default]
    ContainerNumber,
    MblNumber,
}

impl TrackingMode {
    /// Label shown in the tracking-mode selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TrackingMode::ContainerNumber => "Container Number",
            TrackingMode::MblNumber => "Master Bill Of Lading Number",
        }
    }
}

impl Display for TrackingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lifecycle status reported for a tracked shipment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    InTransit,
    Planned,
    Unknown,
    Delivered,
}

impl ShipmentStatus {
    /// Label shown in shipment listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Planned => "Planned",
            ShipmentStatus::Unknown => "Unknown",
            ShipmentStatus::Delivered => "Delivered",
        }
    }
}

impl Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for ShipmentStatus {
    /// Statuses outside the known set collapse to [`ShipmentStatus::Unknown`].
    fn from(s: &str) -> Self {
        match s {
            "IN_TRANSIT" => ShipmentStatus::InTransit,
            "PLANNED" => ShipmentStatus::Planned,
            "DELIVERED" => ShipmentStatus::Delivered,
            _ => ShipmentStatus::Unknown,
        }
    }
}

/// Create payload sent to the shipment endpoint.
///
/// Built from an already-validated draft; field names follow the backend wire
/// contract.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewShipment {
    pub track_with: TrackingMode,
    pub container_no: String,
    pub mbl_no: Option<String>,
    pub carrier: String,
    pub tags: Vec<String>,
    pub followers: Vec<String>,
    pub reference_no: Option<String>,
}

/// Response payload of a successful create call.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ShipmentReceipt {
    /// Human-readable confirmation shown to the user.
    pub message: String,
}
