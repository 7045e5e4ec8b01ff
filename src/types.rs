use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal shape shared by projects, tags and users on the wire.
///
/// Only the fields requested via `opt_fields` are present in responses;
/// anything missing decodes to its default, mirroring the service's
/// partial-response behavior. `email` is only populated for users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Top-level `{"data": [...]}` envelope for collection endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionEnvelope {
    pub data: Vec<BasicRecord>,
}

/// A task as returned by `projects/{id}/tasks`.
///
/// `assignee` is JSON null when the task is unassigned, and `completed_at`
/// is null (or empty) when the task is not completed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemoteTask {
    pub id: u64,
    pub name: String,
    pub assignee: Option<BasicRecord>,
    pub tags: Vec<BasicRecord>,
    pub completed_at: Option<String>,
    pub modified_at: String,
    pub created_at: String,
}

/// `{"data": [...]}` envelope for a project's task list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskPage {
    pub data: Vec<RemoteTask>,
}

/// The record emitted to the caller: remote ids denormalized into local
/// display values, timestamps parsed, section label attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTask {
    pub name: String,
    pub project: String,
    pub remote_id: u64,
    pub assignee: String,
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub completed: Option<DateTime<Utc>>,
    pub section: String,
}
