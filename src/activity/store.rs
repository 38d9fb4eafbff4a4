use tracing::{debug, warn};

use super::Activity;

/// Handed out before a refresh request is issued. Results are applied only if no newer ticket has
/// been applied in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Client side view of the collaborator's activities. Both partitions are rebuilt from scratch
/// on every applied refresh and keep the order the collaborator returned.
#[derive(Debug, Default)]
pub struct ActivityStore {
    active: Vec<Activity>,
    completed: Vec<Activity>,
    issued: u64,
    applied: Option<RefreshTicket>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Replaces both partitions with a split of `activities`. Returns `false` and leaves the store
    /// untouched if a result from a more recent refresh was already applied.
    pub fn apply(&mut self, ticket: RefreshTicket, activities: Vec<Activity>) -> bool {
        if self.applied.is_some_and(|applied| applied > ticket) {
            warn!(
                "Discarding stale refresh {:?}, already showing {:?}",
                ticket, self.applied
            );
            return false;
        }
        let (active, completed) = partition(activities);
        debug!(
            "Applied refresh {:?}: {} active, {} completed",
            ticket,
            active.len(),
            completed.len()
        );
        self.active = active;
        self.completed = completed;
        self.applied = Some(ticket);
        true
    }

    pub fn active(&self) -> &[Activity] {
        &self.active
    }

    pub fn completed(&self) -> &[Activity] {
        &self.completed
    }
}

/// Splits activities into (active, completed), preserving input order inside each half.
pub fn partition(activities: Vec<Activity>) -> (Vec<Activity>, Vec<Activity>) {
    activities.into_iter().partition(Activity::is_active)
}
