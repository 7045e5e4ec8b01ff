//! Task aggregation: projects are walked in remote order, each project's
//! tasks are fetched on demand, and every eligible task is denormalized
//! against the reference maps before being emitted.

use crate::client::ApiClient;
use crate::error::FetchError;
use crate::refs::ReferenceMaps;
use crate::section::SectionTracker;
use crate::timestamp::parse_stamp;
use crate::types::{BasicRecord, NormalizedTask, RemoteTask, TaskPage};

/// Fields requested for each project's task list.
const TASK_FIELDS: &[&str] = &[
    "assignee",
    "name",
    "tags",
    "completed_at",
    "modified_at",
    "created_at",
];

/// Lazy, finite sequence of normalized tasks.
///
/// Opening the feed builds the reference maps and fetches the project
/// list; each `next()` pulls from the current project's tasks, fetching
/// the following project only when the current one is exhausted. After
/// yielding an error or running out of projects the feed is done and
/// yields nothing further. Not restartable.
pub struct TaskFeed<'a> {
    client: &'a ApiClient,
    refs: ReferenceMaps,
    projects: std::vec::IntoIter<BasicRecord>,
    current: Option<ProjectTasks>,
    section: SectionTracker,
    done: bool,
}

struct ProjectTasks {
    name: String,
    tasks: std::vec::IntoIter<RemoteTask>,
}

impl<'a> TaskFeed<'a> {
    /// Builds the reference maps and fetches the project list.
    pub async fn open(client: &'a ApiClient) -> Result<TaskFeed<'a>, FetchError> {
        let refs = ReferenceMaps::build(client).await?;
        let projects = client.fetch_collection("projects", &[]).await?;
        tracing::debug!(target: "taskpull", projects = projects.len(), "Fetched project list");
        Ok(Self {
            client,
            refs,
            projects: projects.into_iter(),
            current: None,
            section: SectionTracker::new(),
            done: false,
        })
    }

    /// Yields the next normalized task, in project order then task order.
    pub async fn next(&mut self) -> Option<Result<NormalizedTask, FetchError>> {
        if self.done {
            return None;
        }
        loop {
            if let Some(current) = self.current.as_mut() {
                while let Some(raw) = current.tasks.next() {
                    // Nameless tasks are not synced and leave the section
                    // state untouched.
                    if raw.name.is_empty() {
                        continue;
                    }
                    if self.section.observe(&raw.name) {
                        continue;
                    }
                    match normalize(&raw, &current.name, self.section.current(), &self.refs) {
                        Ok(task) => return Some(Ok(task)),
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                self.current = None;
            }

            let project = match self.projects.next() {
                Some(project) => project,
                None => {
                    self.done = true;
                    return None;
                }
            };
            match self.fetch_project_tasks(&project).await {
                Ok(tasks) => {
                    self.current = Some(ProjectTasks {
                        name: project.name,
                        tasks: tasks.into_iter(),
                    });
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }

    async fn fetch_project_tasks(
        &self,
        project: &BasicRecord,
    ) -> Result<Vec<RemoteTask>, FetchError> {
        let page: TaskPage = self
            .client
            .get_json(&format!("projects/{}/tasks", project.id), TASK_FIELDS)
            .await?;
        tracing::debug!(
            target: "taskpull",
            project = %project.name,
            tasks = page.data.len(),
            "Fetched project tasks"
        );
        Ok(page.data)
    }
}

/// Fetches at most `max` normalized tasks across all projects.
///
/// Emission order is project order then task order, as returned by the
/// service. Reaching the cap stops iteration immediately: remaining tasks
/// are dropped and further projects are never fetched. The first failure
/// aborts the whole fetch and discards everything accumulated so far.
pub async fn get_tasks(client: &ApiClient, max: usize) -> Result<Vec<NormalizedTask>, FetchError> {
    let mut feed = TaskFeed::open(client).await?;
    let mut out = Vec::new();
    while out.len() < max {
        match feed.next().await {
            Some(Ok(task)) => out.push(task),
            Some(Err(e)) => return Err(e),
            None => break,
        }
    }
    tracing::info!(target: "taskpull", tasks = out.len(), "Fetch complete");
    Ok(out)
}

/// Denormalizes one remote task: parses its timestamps and resolves
/// assignee and tags through the reference maps (misses resolve to empty
/// strings, tag order is preserved).
fn normalize(
    raw: &RemoteTask,
    project: &str,
    section: &str,
    refs: &ReferenceMaps,
) -> Result<NormalizedTask, FetchError> {
    let modified =
        parse_stamp(&raw.modified_at).map_err(|e| FetchError::timestamp("modified at", e))?;
    let created =
        parse_stamp(&raw.created_at).map_err(|e| FetchError::timestamp("created at", e))?;
    let completed = match raw.completed_at.as_deref() {
        None | Some("") => None,
        Some(value) => {
            Some(parse_stamp(value).map_err(|e| FetchError::timestamp("completed at", e))?)
        }
    };

    let assignee = raw
        .assignee
        .as_ref()
        .map(|a| refs.user_handle(a.id))
        .unwrap_or_default();
    let tags = raw.tags.iter().map(|t| refs.tag_name(t.id)).collect();

    Ok(NormalizedTask {
        name: raw.name.clone(),
        project: project.to_string(),
        remote_id: raw.id,
        assignee,
        tags,
        created,
        modified,
        completed,
        section: section.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: u64, name: &str, email: &str) -> BasicRecord {
        BasicRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn remote_task(name: &str) -> RemoteTask {
        RemoteTask {
            id: 11,
            name: name.to_string(),
            assignee: Some(record(7, "", "")),
            tags: vec![record(5, "", ""), record(99, "", "")],
            completed_at: None,
            modified_at: "2024-03-02T09:30:00.000Z".to_string(),
            created_at: "2024-03-01T08:00:00.000Z".to_string(),
        }
    }

    fn refs() -> ReferenceMaps {
        ReferenceMaps::from_records(
            &[record(5, "urgent", "")],
            &[record(7, "", "ana@example.com")],
        )
    }

    #[test]
    fn resolves_assignee_and_tags_in_order() {
        let task = normalize(&remote_task("Write doc"), "Launch", "Prep", &refs()).unwrap();
        assert_eq!(task.name, "Write doc");
        assert_eq!(task.project, "Launch");
        assert_eq!(task.remote_id, 11);
        assert_eq!(task.assignee, "ana");
        assert_eq!(task.tags, vec!["urgent".to_string(), String::new()]);
        assert_eq!(task.section, "Prep");
        assert_eq!(
            task.created,
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn missing_assignee_resolves_to_empty_string() {
        let mut raw = remote_task("Write doc");
        raw.assignee = None;
        let task = normalize(&raw, "Launch", "", &refs()).unwrap();
        assert_eq!(task.assignee, "");
    }

    #[test]
    fn empty_completed_at_means_not_completed() {
        let mut raw = remote_task("Write doc");
        raw.completed_at = Some(String::new());
        let task = normalize(&raw, "Launch", "", &refs()).unwrap();
        assert!(task.completed.is_none());
    }

    #[test]
    fn completed_at_is_parsed_when_present() {
        let mut raw = remote_task("Write doc");
        raw.completed_at = Some("2024-03-03T10:00:00.000Z".to_string());
        let task = normalize(&raw, "Launch", "", &refs()).unwrap();
        assert_eq!(
            task.completed,
            Some(Utc.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn bad_created_at_names_the_field() {
        let mut raw = remote_task("Write doc");
        raw.created_at = "yesterday".to_string();
        let err = normalize(&raw, "Launch", "", &refs()).unwrap_err();
        match err {
            FetchError::TimestampParse { field, .. } => assert_eq!(field, "created at"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_completed_at_names_the_field() {
        let mut raw = remote_task("Write doc");
        raw.completed_at = Some("someday".to_string());
        let err = normalize(&raw, "Launch", "", &refs()).unwrap_err();
        match err {
            FetchError::TimestampParse { field, .. } => assert_eq!(field, "completed at"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
