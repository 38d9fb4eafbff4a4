//! The activity entity as it is stored by the collaborator, plus the client side
//! [store::ActivityStore] that splits fetched activities into active and completed views.

pub mod store;

use std::{fmt::Display, sync::Arc};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Identifier assigned by the collaborator when an activity is created.
#[derive(PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ActivityId(Arc<str>);

impl ActivityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for ActivityId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tracked activity. It is active until `end_date` is set, after which it never
/// changes again.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: ActivityId,
    pub title: Arc<str>,
    #[serde(default)]
    pub description: Arc<str>,
    pub start_date: DateTime<Utc>,
    /// Missing and `null` are both treated as "not ended yet".
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl Activity {
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActivityError {
    #[error("activity title is required")]
    EmptyTitle,
    #[error("activity title is {0} characters long, at most {max} are allowed", max = TITLE_MAX_LEN)]
    TitleTooLong(usize),
    #[error(
        "activity description is {0} characters long, at most {max} are allowed",
        max = DESCRIPTION_MAX_LEN
    )]
    DescriptionTooLong(usize),
}

/// Body of a creation request.
#[derive(PartialEq, Eq, Debug, Serialize, Clone)]
pub struct NewActivity {
    pub title: Arc<str>,
    pub description: Arc<str>,
}

impl NewActivity {
    /// Checks the same bounds the input form applies. Lengths are counted in characters, not
    /// bytes.
    pub fn new(title: &str, description: &str) -> Result<Self, ActivityError> {
        let title_len = title.chars().count();
        if title.trim().is_empty() {
            return Err(ActivityError::EmptyTitle);
        }
        if title_len > TITLE_MAX_LEN {
            return Err(ActivityError::TitleTooLong(title_len));
        }
        let description_len = description.chars().count();
        if description_len > DESCRIPTION_MAX_LEN {
            return Err(ActivityError::DescriptionTooLong(description_len));
        }
        Ok(Self {
            title: title.into(),
            description: description.into(),
        })
    }
}
