//! Orchestrates starting, ending and refreshing activities against an [ActivityCollaborator].
//!
//! Every operation holds the shared [BusyFlag] while it runs. A call made while the flag is set
//! fails with [ControllerError::Busy] without reaching the backend. There is no timeout, so a
//! request that never completes keeps the flag set.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use thiserror::Error;
use tracing::{error, info, instrument};

use crate::{
    activity::{store::ActivityStore, Activity, ActivityId, NewActivity},
    client::{ActivityCollaborator, ClientError},
};

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Another operation is still in progress")]
    Busy,
    #[error(transparent)]
    Collaborator(#[from] ClientError),
}

/// Shared indicator that some lifecycle operation is in flight. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(self.clone()))
    }
}

/// Clears the flag when dropped, whatever way the operation finished.
#[derive(Debug)]
pub struct BusyGuard(BusyFlag);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::Release);
    }
}

pub struct LifecycleController<C> {
    collaborator: C,
    store: Mutex<ActivityStore>,
    busy: BusyFlag,
}

impl<C: ActivityCollaborator> LifecycleController<C> {
    pub fn new(collaborator: C) -> Self {
        Self {
            collaborator,
            store: Mutex::new(ActivityStore::new()),
            busy: BusyFlag::default(),
        }
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    /// Activities without an end, as of the last applied refresh.
    pub fn active(&self) -> Vec<Activity> {
        self.store().active().to_vec()
    }

    /// Activities that were ended, as of the last applied refresh.
    pub fn completed(&self) -> Vec<Activity> {
        self.store().completed().to_vec()
    }

    /// Refetches every activity. On failure both views stay as they were.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<(), ControllerError> {
        let _guard = self.acquire()?;
        self.refresh_inner().await
    }

    /// Asks the backend to create `activity` and refreshes afterwards. The new activity only
    /// shows up once that refresh is applied.
    #[instrument(skip(self))]
    pub async fn start(&self, activity: NewActivity) -> Result<(), ControllerError> {
        let _guard = self.acquire()?;
        self.collaborator
            .create_activity(&activity)
            .await
            .inspect_err(|e| error!("Failed to start activity {:?}: {e}", activity.title))?;
        info!("Started activity {:?}", activity.title);
        self.refresh_inner().await
    }

    /// Asks the backend to end `id` and refreshes afterwards. Whether `id` is currently active is
    /// left for the backend to decide.
    #[instrument(skip(self))]
    pub async fn end(&self, id: &ActivityId) -> Result<(), ControllerError> {
        let _guard = self.acquire()?;
        self.collaborator
            .close_activity(id)
            .await
            .inspect_err(|e| error!("Failed to end activity {id}: {e}"))?;
        info!("Ended activity {id}");
        self.refresh_inner().await
    }

    async fn refresh_inner(&self) -> Result<(), ControllerError> {
        let ticket = self.store().begin_refresh();
        let activities = self
            .collaborator
            .list_activities()
            .await
            .inspect_err(|e| error!("Failed to fetch activities: {e}"))?;
        self.store().apply(ticket, activities);
        Ok(())
    }

    fn acquire(&self) -> Result<BusyGuard, ControllerError> {
        self.busy.try_acquire().ok_or(ControllerError::Busy)
    }

    fn store(&self) -> MutexGuard<'_, ActivityStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
