//! Services coordinating the shipment form workflows.

pub mod carriers;
pub mod session;
pub mod shipment;
