//! Band — the managed entity, identified by a server-assigned id and
//! unique by name.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{BandError, ValidationError};
use crate::id::{BandId, TaskId};
use crate::task::Task;
use crate::time::{self, Timestamp};

/// Longest accepted band name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// A persisted band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub id: BandId,
    pub name: String,
    pub genre: Option<String>,
    pub members: Vec<String>,
    pub tasks: Vec<Task>,
    pub created_at: Timestamp,
}

impl Band {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BandError::Validation`] when the name, a member name or a
    /// task breaks the rules described on [`NewBand::validate`].
    pub fn validate(&self) -> Result<(), BandError> {
        validate_fields(&self.name, &self.members, &self.tasks)
    }

    /// Apply the fields present in `patch`, leaving the rest untouched.
    ///
    /// `id` and `created_at` are never changed. The result is not validated.
    pub fn apply(&mut self, patch: BandPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(members) = patch.members {
            self.members = members;
        }
        if let Some(tasks) = patch.tasks {
            self.tasks = tasks;
        }
    }

    /// Find a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

/// A band that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBand {
    pub name: String,
    pub genre: Option<String>,
    pub members: Vec<String>,
    pub tasks: Vec<Task>,
    pub created_at: Timestamp,
}

impl NewBand {
    /// Create a builder for constructing a [`NewBand`].
    #[must_use]
    pub fn builder() -> NewBandBuilder {
        NewBandBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BandError::Validation`] when:
    /// - `name` is blank ([`ValidationError::EmptyName`])
    /// - `name` is longer than [`MAX_NAME_LEN`] ([`ValidationError::NameTooLong`])
    /// - a member name is blank ([`ValidationError::EmptyMemberName`])
    /// - a task title is blank ([`ValidationError::EmptyTaskTitle`])
    /// - two tasks share an id ([`ValidationError::DuplicateTaskId`])
    pub fn validate(&self) -> Result<(), BandError> {
        validate_fields(&self.name, &self.members, &self.tasks)
    }

    /// Attach the storage-assigned id.
    #[must_use]
    pub fn into_band(self, id: BandId) -> Band {
        Band {
            id,
            name: self.name,
            genre: self.genre,
            members: self.members,
            tasks: self.tasks,
            created_at: self.created_at,
        }
    }
}

/// Step-by-step builder for [`NewBand`].
#[derive(Debug, Default)]
pub struct NewBandBuilder {
    name: Option<String>,
    genre: Option<String>,
    members: Vec<String>,
    tasks: Vec<Task>,
}

impl NewBandBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    #[must_use]
    pub fn members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }

    #[must_use]
    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    #[must_use]
    pub fn tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Consume the builder, validate, and return a [`NewBand`].
    ///
    /// # Errors
    ///
    /// Returns [`BandError::Validation`] if `name` is missing or any
    /// invariant of [`NewBand::validate`] fails.
    pub fn build(self) -> Result<NewBand, BandError> {
        let band = NewBand {
            name: self.name.unwrap_or_default(),
            genre: self.genre,
            members: self.members,
            tasks: self.tasks,
            created_at: time::now(),
        };
        band.validate()?;
        Ok(band)
    }
}

/// A partial update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BandPatch {
    pub name: Option<String>,
    /// `Some(None)` (an explicit `null`) clears the genre.
    #[serde(default, deserialize_with = "present")]
    pub genre: Option<Option<String>>,
    pub members: Option<Vec<String>>,
    pub tasks: Option<Vec<Task>>,
}

/// Distinguish a field sent as `null` from a missing one.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validate_fields(name: &str, members: &[String], tasks: &[Task]) -> Result<(), BandError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN }.into());
    }
    if members.iter().any(|member| member.trim().is_empty()) {
        return Err(ValidationError::EmptyMemberName.into());
    }

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if task.title.trim().is_empty() {
            return Err(ValidationError::EmptyTaskTitle.into());
        }
        if !seen.insert(task.id) {
            return Err(ValidationError::DuplicateTaskId(task.id).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, title: &str) -> Task {
        Task {
            id: TaskId::new(id),
            title: title.to_string(),
            required_members: vec![],
        }
    }

    #[test]
    fn should_build_valid_band_when_name_provided() {
        let band = NewBand::builder()
            .name("Zed")
            .genre("rock")
            .member("Ann")
            .build()
            .unwrap();
        assert_eq!(band.name, "Zed");
        assert_eq!(band.genre.as_deref(), Some("rock"));
        assert_eq!(band.members, vec!["Ann".to_string()]);
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = NewBand::builder().build();
        assert!(matches!(
            result,
            Err(BandError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = NewBand::builder().name("   ").build();
        assert!(matches!(
            result,
            Err(BandError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_name_longer_than_limit() {
        let result = NewBand::builder()
            .name("x".repeat(MAX_NAME_LEN + 1))
            .build();
        assert!(matches!(
            result,
            Err(BandError::Validation(ValidationError::NameTooLong { .. }))
        ));
    }

    #[test]
    fn should_reject_blank_member_name() {
        let result = NewBand::builder().name("Zed").member("").build();
        assert!(matches!(
            result,
            Err(BandError::Validation(ValidationError::EmptyMemberName))
        ));
    }

    #[test]
    fn should_reject_duplicate_task_ids() {
        let result = NewBand::builder()
            .name("Zed")
            .task(task(1, "Rehearsal"))
            .task(task(1, "Gig"))
            .build();
        assert!(matches!(
            result,
            Err(BandError::Validation(ValidationError::DuplicateTaskId(id))) if id == TaskId::new(1)
        ));
    }

    #[test]
    fn should_reject_blank_task_title() {
        let result = NewBand::builder().name("Zed").task(task(1, " ")).build();
        assert!(matches!(
            result,
            Err(BandError::Validation(ValidationError::EmptyTaskTitle))
        ));
    }

    #[test]
    fn should_apply_only_present_fields() {
        let mut band = NewBand::builder()
            .name("Zed")
            .member("Ann")
            .build()
            .unwrap()
            .into_band(BandId::new(1));
        let created_at = band.created_at;

        band.apply(BandPatch {
            genre: Some(Some("jazz".to_string())),
            ..BandPatch::default()
        });

        assert_eq!(band.id, BandId::new(1));
        assert_eq!(band.name, "Zed");
        assert_eq!(band.genre.as_deref(), Some("jazz"));
        assert_eq!(band.members, vec!["Ann".to_string()]);
        assert_eq!(band.created_at, created_at);
    }

    #[test]
    fn should_find_task_by_id() {
        let band = NewBand::builder()
            .name("Zed")
            .task(task(4, "Gig"))
            .build()
            .unwrap()
            .into_band(BandId::new(1));
        assert_eq!(band.task(TaskId::new(4)).map(|t| t.title.as_str()), Some("Gig"));
        assert!(band.task(TaskId::new(5)).is_none());
    }

    #[test]
    fn should_deserialize_partial_patch() {
        let patch: BandPatch = serde_json::from_str(r#"{"name":"Yak"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Yak"));
        assert!(patch.genre.is_none());
        assert!(patch.members.is_none());
        assert!(patch.tasks.is_none());
    }

    #[test]
    fn should_clear_genre_when_patched_with_null() {
        let mut band = NewBand::builder()
            .name("Zed")
            .genre("rock")
            .build()
            .unwrap()
            .into_band(BandId::new(1));

        let patch: BandPatch = serde_json::from_str(r#"{"genre":null}"#).unwrap();
        assert_eq!(patch.genre, Some(None));
        band.apply(patch);
        assert!(band.genre.is_none());
    }

    #[test]
    fn should_keep_genre_when_absent_from_patch() {
        let mut band = NewBand::builder()
            .name("Zed")
            .genre("rock")
            .build()
            .unwrap()
            .into_band(BandId::new(1));

        band.apply(serde_json::from_str(r#"{"members":["Ann"]}"#).unwrap());
        assert_eq!(band.genre.as_deref(), Some("rock"));
        assert_eq!(band.members, vec!["Ann".to_string()]);
    }
}
