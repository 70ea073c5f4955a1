//! The only writer of tracking fields.
//!
//! ## Project scope
//!
//! A project and the tasks assigned to it form one scope. At most one timer in
//! a scope runs at any instant:
//!
//! - starting a task stops the project timer and any sibling task timer first
//! - starting a project stops every running task timer of the project first
//! - stopping a project also stops every running task timer of the project
//!
//! Tasks without a project form a scope of their own.
//!
//! Each operation reads the clock once, so every interval closed by a cascade
//! ends at the same instant, and runs inside one `TimerTransaction`. An error
//! anywhere returns before `commit`, which discards the whole unit of work.

use crate::clock::{Clock, to_stored_precision};
use crate::coordinator::timer_store::{TimerStore, TimerTransaction};
use crate::{
    CoreError, Project, Result as CoreErrorResult, StoppedTimer, Task, TimeEntry, TimerOwner,
    Transition,
};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

pub struct TimerCoordinator<S: TimerStore> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: TimerStore> TimerCoordinator<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// One timestamp per operation, at the precision it will be stored with
    fn now(&self) -> DateTime<Utc> {
        to_stored_precision(self.clock.now())
    }

    /// Start the task's timer, first clearing its project scope.
    pub async fn start_task(
        &self,
        account_id: Uuid,
        task_id: Uuid,
    ) -> CoreErrorResult<Transition<Task>> {
        let now = self.now();
        let mut tx = self.store.begin(account_id).await?;

        let mut task = load_task(&mut tx, account_id, task_id).await?;
        if task.timer().is_tracking() {
            return Err(CoreError::already_tracking(task.owner()));
        }

        let mut stopped = Vec::new();
        if let Some(project_id) = task.project_id {
            let mut project = load_project(&mut tx, account_id, project_id).await?;
            if project.timer().is_tracking() {
                stopped.push(stop_project_timer(&mut tx, &mut project, now).await?);
            }
            stopped.extend(stop_tracking_tasks(&mut tx, account_id, project_id, now).await?);
        }

        let owner = task.owner();
        task.timer_mut().start(owner, now)?;
        task.updated_at = now;
        tx.update_task_timer(&task).await?;
        tx.create_time_entry(&TimeEntry::open_for_task(
            account_id,
            task.id,
            task.project_id,
            now,
        ))
        .await?;

        tx.commit().await?;

        info!(
            "Started {} (cascade stopped {} timer(s))",
            owner,
            stopped.len()
        );

        Ok(Transition {
            entity: task,
            started: Some(owner),
            stopped,
        })
    }

    /// Stop the task's timer, optionally attaching a description to the
    /// closed ledger entry.
    pub async fn stop_task(
        &self,
        account_id: Uuid,
        task_id: Uuid,
        description: Option<String>,
    ) -> CoreErrorResult<Transition<Task>> {
        let description = normalize_description(description)?;
        let now = self.now();
        let mut tx = self.store.begin(account_id).await?;

        let mut task = load_task(&mut tx, account_id, task_id).await?;
        if !task.timer().is_tracking() {
            return Err(CoreError::not_tracking(task.owner()));
        }

        let stopped = stop_task_timer(&mut tx, &mut task, now, description).await?;

        tx.commit().await?;

        info!("Stopped {} after {}s", stopped.owner, stopped.elapsed_seconds);

        Ok(Transition {
            entity: task,
            started: None,
            stopped: vec![stopped],
        })
    }

    /// Start the project's timer after stopping every running task in it.
    pub async fn start_project(
        &self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> CoreErrorResult<Transition<Project>> {
        let now = self.now();
        let mut tx = self.store.begin(account_id).await?;

        let mut project = load_project(&mut tx, account_id, project_id).await?;
        if project.timer().is_tracking() {
            return Err(CoreError::already_tracking(project.owner()));
        }

        let stopped = stop_tracking_tasks(&mut tx, account_id, project_id, now).await?;

        let owner = project.owner();
        project.timer_mut().start(owner, now)?;
        project.updated_at = now;
        tx.update_project_timer(&project).await?;
        tx.create_time_entry(&TimeEntry::open_for_project(account_id, project_id, now))
            .await?;

        tx.commit().await?;

        info!(
            "Started {} (cascade stopped {} task timer(s))",
            owner,
            stopped.len()
        );

        Ok(Transition {
            entity: project,
            started: Some(owner),
            stopped,
        })
    }

    /// Stop the project's timer and every running task timer in it.
    pub async fn stop_project(
        &self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> CoreErrorResult<Transition<Project>> {
        let now = self.now();
        let mut tx = self.store.begin(account_id).await?;

        let mut project = load_project(&mut tx, account_id, project_id).await?;
        if !project.timer().is_tracking() {
            return Err(CoreError::not_tracking(project.owner()));
        }

        let mut stopped = vec![stop_project_timer(&mut tx, &mut project, now).await?];
        stopped.extend(stop_tracking_tasks(&mut tx, account_id, project_id, now).await?);

        tx.commit().await?;

        info!(
            "Stopped {} after {}s (cascade stopped {} task timer(s))",
            project.owner(),
            stopped[0].elapsed_seconds,
            stopped.len() - 1
        );

        Ok(Transition {
            entity: project,
            started: None,
            stopped,
        })
    }

    /// Reassign a task to another project (or to none). A running task cannot
    /// change scope; stop it first.
    pub async fn move_task(
        &self,
        account_id: Uuid,
        task_id: Uuid,
        project_id: Option<Uuid>,
    ) -> CoreErrorResult<Task> {
        let now = self.now();
        let mut tx = self.store.begin(account_id).await?;

        let mut task = load_task(&mut tx, account_id, task_id).await?;
        if task.project_id == project_id {
            return Ok(task);
        }

        if task.timer().is_tracking() {
            return Err(CoreError::tracking_active(task.owner()));
        }

        if let Some(project_id) = project_id {
            load_project(&mut tx, account_id, project_id).await?;
        }

        task.project_id = project_id;
        task.updated_at = now;
        tx.update_task_project(&task).await?;

        tx.commit().await?;

        info!("Moved {} to project {:?}", task.owner(), project_id);

        Ok(task)
    }
}

#[track_caller]
fn normalize_description(description: Option<String>) -> CoreErrorResult<Option<String>> {
    let Some(description) = description else {
        return Ok(None);
    };

    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::validation(format!(
            "description must be at most {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }

    Ok(Some(trimmed.to_string()))
}

async fn load_task<T: TimerTransaction>(
    tx: &mut T,
    account_id: Uuid,
    task_id: Uuid,
) -> CoreErrorResult<Task> {
    tx.find_task(account_id, task_id)
        .await?
        .ok_or_else(|| CoreError::not_found("task", task_id))
}

async fn load_project<T: TimerTransaction>(
    tx: &mut T,
    account_id: Uuid,
    project_id: Uuid,
) -> CoreErrorResult<Project> {
    tx.find_project(account_id, project_id)
        .await?
        .ok_or_else(|| CoreError::not_found("project", project_id))
}

async fn stop_tracking_tasks<T: TimerTransaction>(
    tx: &mut T,
    account_id: Uuid,
    project_id: Uuid,
    now: DateTime<Utc>,
) -> CoreErrorResult<Vec<StoppedTimer>> {
    let tasks = tx.find_tracking_tasks(account_id, project_id).await?;
    let mut stopped = Vec::with_capacity(tasks.len());

    for mut task in tasks {
        let result = stop_task_timer(tx, &mut task, now, None).await?;
        debug!(
            "Cascade stop of {} in project {} ({}s)",
            result.owner, project_id, result.elapsed_seconds
        );
        stopped.push(result);
    }

    Ok(stopped)
}

async fn stop_task_timer<T: TimerTransaction>(
    tx: &mut T,
    task: &mut Task,
    now: DateTime<Utc>,
    description: Option<String>,
) -> CoreErrorResult<StoppedTimer> {
    let owner = task.owner();
    let started_at = task
        .timer()
        .tracked_start_time()
        .ok_or_else(|| CoreError::not_tracking(owner))?;

    let elapsed = task.timer_mut().stop(owner, now)?;
    task.updated_at = now;
    tx.update_task_timer(task).await?;

    let fallback = TimeEntry::open_for_task(task.account_id, task.id, task.project_id, started_at);
    let entry_id = close_open_entry(tx, task.account_id, owner, fallback, now, description).await?;

    Ok(StoppedTimer {
        owner,
        elapsed_seconds: elapsed,
        entry_id,
    })
}

async fn stop_project_timer<T: TimerTransaction>(
    tx: &mut T,
    project: &mut Project,
    now: DateTime<Utc>,
) -> CoreErrorResult<StoppedTimer> {
    let owner = project.owner();
    let started_at = project
        .timer()
        .tracked_start_time()
        .ok_or_else(|| CoreError::not_tracking(owner))?;

    let elapsed = project.timer_mut().stop(owner, now)?;
    project.updated_at = now;
    tx.update_project_timer(project).await?;

    let fallback = TimeEntry::open_for_project(project.account_id, project.id, started_at);
    let entry_id = close_open_entry(tx, project.account_id, owner, fallback, now, None).await?;

    Ok(StoppedTimer {
        owner,
        elapsed_seconds: elapsed,
        entry_id,
    })
}

/// Close the owner's open entry. A running timer without an open entry means
/// the ledger lost a row; the interval is written from the timer's own start
/// instead so the ledger still covers it.
async fn close_open_entry<T: TimerTransaction>(
    tx: &mut T,
    account_id: Uuid,
    owner: TimerOwner,
    fallback: TimeEntry,
    now: DateTime<Utc>,
    description: Option<String>,
) -> CoreErrorResult<Uuid> {
    match tx.find_open_time_entry(account_id, owner).await? {
        Some(mut entry) => {
            entry.close(now, description);
            tx.update_time_entry(&entry).await?;
            Ok(entry.id)
        }
        None => {
            warn!(
                "{} was tracking without an open time entry; recording interval from timer start",
                owner
            );
            let mut entry = fallback;
            entry.close(now, description);
            tx.create_time_entry(&entry).await?;
            Ok(entry.id)
        }
    }
}
