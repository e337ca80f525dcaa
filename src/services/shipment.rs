//! Submission flow for the shipment creation form.

use validator::Validate;

use crate::capabilities::{CreationSurface, Notifier};
use crate::domain::shipment::NewShipment;
use crate::forms::collect_field_errors;
use crate::repository::ShipmentWriter;
use crate::repository::errors::RepositoryError;
use crate::services::session::ShipmentFormSession;

/// Terminal result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The shipment was created; the draft has been reset and the surface
    /// closed.
    Created,
    /// Validation failed; field errors are attached to the session and no
    /// create call was made.
    Invalid,
    /// The create call was rejected; the draft is left intact for
    /// correction and resubmit.
    Rejected,
    /// A create call is already in flight for this session.
    InFlight,
}

/// Validates the whole draft and, when it passes, issues the create call.
///
/// Success side effects run in order: success notification with the receipt
/// message, draft reset, surface close. A rejected call notifies with the
/// response-body message when one is present and otherwise stays silent.
pub fn submit_shipment<R, N, S>(
    session: &mut ShipmentFormSession,
    repo: &R,
    notifier: &N,
    surface: &S,
) -> SubmitOutcome
where
    R: ShipmentWriter + ?Sized,
    N: Notifier + ?Sized,
    S: CreationSurface + ?Sized,
{
    if !session.begin_submit() {
        return SubmitOutcome::InFlight;
    }

    if let Err(errors) = session.draft().validate() {
        session.set_errors(collect_field_errors(&errors));
        session.finish_submit();
        return SubmitOutcome::Invalid;
    }
    session.clear_errors();

    let new_shipment = NewShipment::from(session.draft());
    match repo.create_shipment(&new_shipment) {
        Ok(receipt) => {
            notifier.success(&receipt.message);
            session.reset_draft();
            surface.close();
            session.finish_submit();
            SubmitOutcome::Created
        }
        Err(err) => {
            log::error!("Failed to create shipment: {err}");
            if let RepositoryError::Rejected {
                message: Some(message),
            } = &err
            {
                notifier.error(message);
            }
            session.finish_submit();
            SubmitOutcome::Rejected
        }
    }
}
