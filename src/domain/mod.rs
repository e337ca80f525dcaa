//! Domain values exposed by the shipment form core.

pub mod carrier;
pub mod roles;
pub mod shipment;
