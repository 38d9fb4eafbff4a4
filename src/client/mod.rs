//! Contract with the remote activity backend. [ActivityCollaborator] is the seam the controller
//! depends on, [http::HttpCollaborator] is the realization talking to the REST api.

pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::activity::{Activity, ActivityId, NewActivity};

pub use error::ClientError;

/// The three operations the backend has to provide.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityCollaborator: Send + Sync {
    /// Returns every activity, in the order the backend keeps them.
    async fn list_activities(&self) -> Result<Vec<Activity>, ClientError>;

    /// Creates an activity starting now. Whatever the backend answers with is dropped.
    async fn create_activity(&self, activity: &NewActivity) -> Result<(), ClientError>;

    /// Sets the end of an activity to now.
    async fn close_activity(&self, id: &ActivityId) -> Result<(), ClientError>;
}
