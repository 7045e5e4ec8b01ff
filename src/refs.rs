use std::collections::HashMap;

use crate::client::ApiClient;
use crate::error::FetchError;
use crate::types::BasicRecord;

/// Read-only id-to-display-value lookups built once per fetch.
///
/// Tags map to their names; users map to the local part of their email
/// address. A lookup miss resolves to the empty string, never an error.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMaps {
    tags: HashMap<u64, String>,
    users: HashMap<u64, String>,
}

impl ReferenceMaps {
    /// Fetches the full tag and user collections and builds both maps.
    /// Fails if either fetch fails; no partial maps are returned.
    pub async fn build(client: &ApiClient) -> Result<Self, FetchError> {
        let tags = client.fetch_collection("tags", &[]).await?;
        let users = client.fetch_collection("users", &["email"]).await?;
        tracing::debug!(
            target: "taskpull",
            tags = tags.len(),
            users = users.len(),
            "Built reference maps"
        );
        Ok(Self::from_records(&tags, &users))
    }

    pub fn from_records(tags: &[BasicRecord], users: &[BasicRecord]) -> Self {
        let tags = tags.iter().map(|t| (t.id, t.name.clone())).collect();
        let users = users
            .iter()
            .map(|u| (u.id, local_handle(&u.email).to_string()))
            .collect();
        Self { tags, users }
    }

    pub fn tag_name(&self, id: u64) -> String {
        self.tags.get(&id).cloned().unwrap_or_default()
    }

    pub fn user_handle(&self, id: u64) -> String {
        self.users.get(&id).cloned().unwrap_or_default()
    }
}

/// Local handle for a user: the part of the email before `@`.
fn local_handle(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}
