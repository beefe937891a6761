//! Role-erased workspace
//!
//! Callers that only learn the role at runtime (after onboarding) hold an
//! [`AnyWorkspace`] and dispatch through it.

use crate::config::FlowboxConfig;
use crate::error::WorkspaceError;
use crate::generation::{TimelineGenerator, TimelineRequest};
use crate::profile::{Pod, Solo, Study, Team, View, WorkspaceProfile};
use crate::report::WorkspaceReport;
use crate::workspace::Workspace;
use flowbox_board::{ItemId, ItemKind};
use flowbox_onboarding::{Destination, UserRole};
use rand::Rng;

#[derive(Debug)]
pub enum AnyWorkspace {
    Solo(Workspace<Solo>),
    Study(Workspace<Study>),
    Team(Workspace<Team>),
    Pod(Workspace<Pod>),
}

macro_rules! each {
    ($self:expr, $ws:ident => $body:expr) => {
        match $self {
            AnyWorkspace::Solo($ws) => $body,
            AnyWorkspace::Study($ws) => $body,
            AnyWorkspace::Team($ws) => $body,
            AnyWorkspace::Pod($ws) => $body,
        }
    };
}

impl AnyWorkspace {
    pub fn for_role(role: UserRole, config: &FlowboxConfig) -> Result<Self, WorkspaceError> {
        Ok(match role {
            UserRole::SoloCreator => Self::Solo(Workspace::new(config)?),
            UserRole::Student => Self::Study(Workspace::new(config)?),
            UserRole::SmallTeam => Self::Team(Workspace::new(config)?),
            UserRole::LearningPod => Self::Pod(Workspace::new(config)?),
        })
    }

    /// Workspace page a destination opens, if it is one
    pub fn for_destination(
        destination: Destination,
        config: &FlowboxConfig,
    ) -> Result<Option<Self>, WorkspaceError> {
        let role = match destination {
            Destination::SoloCreator => UserRole::SoloCreator,
            Destination::Student => UserRole::Student,
            Destination::Team => UserRole::SmallTeam,
            Destination::Pod => UserRole::LearningPod,
            _ => return Ok(None),
        };
        Self::for_role(role, config).map(Some)
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        match self {
            Self::Solo(_) => Solo::ROLE,
            Self::Study(_) => Study::ROLE,
            Self::Team(_) => Team::ROLE,
            Self::Pod(_) => Pod::ROLE,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        each!(self, ws => ws.title())
    }

    pub fn rename(&mut self, title: &str) -> Result<(), WorkspaceError> {
        each!(self, ws => ws.rename(title))
    }

    #[must_use]
    pub fn view(&self) -> View {
        each!(self, ws => ws.view())
    }

    #[must_use]
    pub fn views(&self) -> &'static [View] {
        each!(self, ws => ws.views())
    }

    pub fn select_view(&mut self, view: View) -> Result<(), WorkspaceError> {
        each!(self, ws => ws.select_view(view))
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        each!(self, ws => ws.board().len())
    }

    /// Add a card of a kind picked by `rng` from the role's add menu
    pub fn add_random_item<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ItemId {
        fn pick<K: ItemKind, R: Rng + ?Sized>(rng: &mut R) -> K {
            K::ALL[rng.random_range(0..K::ALL.len())]
        }
        each!(self, ws => ws.add_item(pick(rng)))
    }

    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        each!(self, ws => ws.remove_item(id).is_some())
    }

    pub async fn generate_timeline<G>(
        &mut self,
        generator: &G,
        request: TimelineRequest,
    ) -> Result<(), WorkspaceError>
    where
        G: TimelineGenerator + ?Sized,
    {
        each!(self, ws => ws.generate_timeline(generator, request).await)
    }

    #[must_use]
    pub fn report(&self) -> WorkspaceReport {
        each!(self, ws => ws.report())
    }

    pub fn to_json(&self) -> Result<String, WorkspaceError> {
        each!(self, ws => ws.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn role_round_trips() {
        let config = FlowboxConfig::new().with_seed(3);
        for role in UserRole::ALL {
            let ws = AnyWorkspace::for_role(role, &config).unwrap();
            assert_eq!(ws.role(), role);
            assert_eq!(ws.view(), View::Canvas);
        }
    }

    #[test]
    fn destinations_map_to_pages() {
        let config = FlowboxConfig::new();
        let ws = AnyWorkspace::for_destination(Destination::Pod, &config)
            .unwrap()
            .unwrap();
        assert_eq!(ws.role(), UserRole::LearningPod);
        assert!(AnyWorkspace::for_destination(Destination::Dashboard, &config)
            .unwrap()
            .is_none());
        assert!(AnyWorkspace::for_destination(Destination::TeamSetup, &config)
            .unwrap()
            .is_none());
    }

    #[test]
    fn random_items_extend_board() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut ws = AnyWorkspace::for_role(UserRole::Student, &FlowboxConfig::new()).unwrap();
        let id = ws.add_random_item(&mut rng);
        assert_eq!(ws.item_count(), 5);
        assert!(ws.remove_item(&id));
        assert!(!ws.remove_item(&id));
    }
}
