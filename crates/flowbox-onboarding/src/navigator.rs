use crate::role::Destination;

/// Routing collaborator
///
/// The onboarding core never routes on its own; it asks the navigator to
/// open a destination exactly once per completed flow.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}
