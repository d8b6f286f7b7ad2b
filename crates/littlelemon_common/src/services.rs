//! Service abstractions for the booking collaborators.
//!
//! The host environment may supply a slot lookup and a reservation sink. Both
//! are injected behind these traits so the booking workflow can run against
//! real HTTP backends, in-process fakes, or nothing at all.

use chrono::NaiveDate;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::models::ReservationRequest;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl BoxedError {
    /// Box any concrete error.
    pub fn new<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        BoxedError(Box::new(err))
    }
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Looks up bookable time slots for a date.
pub trait AvailabilityService: Send + Sync {
    /// Error type returned by availability lookups.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the ordered slot strings (e.g. `"17:00"`) offered on `date`.
    fn fetch_slots(&self, date: NaiveDate) -> BoxFuture<'_, Vec<String>, Self::Error>;
}

/// Accepts completed reservations.
pub trait ReservationService: Send + Sync {
    /// Error type returned by submissions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Hand over a reservation. `Ok(true)` means accepted, `Ok(false)` rejected.
    fn submit_reservation(&self, request: ReservationRequest) -> BoxFuture<'_, bool, Self::Error>;
}

// Lets a caller keep a handle on a collaborator it has also injected.
impl<S: AvailabilityService + ?Sized> AvailabilityService for Arc<S> {
    type Error = S::Error;

    fn fetch_slots(&self, date: NaiveDate) -> BoxFuture<'_, Vec<String>, Self::Error> {
        (**self).fetch_slots(date)
    }
}

impl<S: ReservationService + ?Sized> ReservationService for Arc<S> {
    type Error = S::Error;

    fn submit_reservation(&self, request: ReservationRequest) -> BoxFuture<'_, bool, Self::Error> {
        (**self).submit_reservation(request)
    }
}

/// Shared-pointer aliases used wherever the concrete collaborator is erased.
pub type SharedAvailabilityService = Arc<dyn AvailabilityService<Error = BoxedError>>;
pub type SharedReservationService = Arc<dyn ReservationService<Error = BoxedError>>;

/// A factory for the optional collaborators.
///
/// `None` means the collaborator is not configured and the booking workflow
/// uses its local fallback.
pub trait ServiceFactory: Send + Sync {
    /// Get the availability service, if configured.
    fn availability_service(&self) -> Option<SharedAvailabilityService>;

    /// Get the reservation service, if configured.
    fn reservation_service(&self) -> Option<SharedReservationService>;
}

/// Adapter erasing a collaborator's concrete error into [`BoxedError`].
pub struct BoxedService<S>(pub S);

impl<S: AvailabilityService> AvailabilityService for BoxedService<S> {
    type Error = BoxedError;

    fn fetch_slots(&self, date: NaiveDate) -> BoxFuture<'_, Vec<String>, Self::Error> {
        Box::pin(async move { self.0.fetch_slots(date).await.map_err(BoxedError::new) })
    }
}

impl<S: ReservationService> ReservationService for BoxedService<S> {
    type Error = BoxedError;

    fn submit_reservation(&self, request: ReservationRequest) -> BoxFuture<'_, bool, Self::Error> {
        Box::pin(async move {
            self.0
                .submit_reservation(request)
                .await
                .map_err(BoxedError::new)
        })
    }
}

/// Wrap an availability service for injection.
pub fn share_availability<S: AvailabilityService + 'static>(service: S) -> SharedAvailabilityService {
    Arc::new(BoxedService(service))
}

/// Wrap a reservation service for injection.
pub fn share_reservation<S: ReservationService + 'static>(service: S) -> SharedReservationService {
    Arc::new(BoxedService(service))
}
