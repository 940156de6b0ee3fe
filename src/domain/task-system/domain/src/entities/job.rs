// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{JobID, JobOutcome, JobStatus};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Request to place a job into the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    /// Selects the runner responsible for the job
    pub task_type: String,
    /// Task-specific parameters
    pub payload: serde_json::Value,
    /// Job will not be taken before this time
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Agents may restrict themselves to a single group
    pub group: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Descriptor of a job stored in the queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobID,
    pub task_type: String,
    pub payload: serde_json::Value,
    pub group: Option<String>,
    pub status: JobStatus,
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(job_id: JobID, new_job: NewJob, created_at: DateTime<Utc>) -> Self {
        Self {
            job_id,
            task_type: new_job.task_type,
            payload: new_job.payload,
            group: new_job.group,
            status: JobStatus::Queued,
            failure_reason: None,
            created_at,
            scheduled_at: new_job.scheduled_at,
            started_at: None,
            finished_at: None,
        }
    }

    /// Whether an agent may take this job at the given moment
    pub fn is_ready(&self, now: DateTime<Utc>) -> bool {
        self.status == JobStatus::Queued && self.scheduled_at.is_none_or(|t| t <= now)
    }

    pub fn belongs_to(&self, group: Option<&str>) -> bool {
        match group {
            None => true,
            Some(group) => self.group.as_deref() == Some(group),
        }
    }

    /// Queued -> Running
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), IllegalJobTransitionError> {
        if self.status != JobStatus::Queued {
            return Err(IllegalJobTransitionError {
                job_id: self.job_id,
                from: self.status,
                to: JobStatus::Running,
            });
        }

        self.status = JobStatus::Running;
        self.started_at = Some(now);
        Ok(())
    }

    /// Running -> Done | Failed
    pub fn finish(
        &mut self,
        outcome: JobOutcome,
        now: DateTime<Utc>,
    ) -> Result<(), IllegalJobTransitionError> {
        let to = match &outcome {
            JobOutcome::Success => JobStatus::Done,
            JobOutcome::Failed { .. } => JobStatus::Failed,
        };

        if self.status != JobStatus::Running {
            return Err(IllegalJobTransitionError {
                job_id: self.job_id,
                from: self.status,
                to,
            });
        }

        self.status = to;
        self.finished_at = Some(now);
        if let JobOutcome::Failed { reason } = outcome {
            self.failure_reason = Some(reason);
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Job {job_id} cannot transition from {from} to {to}")]
pub struct IllegalJobTransitionError {
    pub job_id: JobID,
    pub from: JobStatus,
    pub to: JobStatus,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
