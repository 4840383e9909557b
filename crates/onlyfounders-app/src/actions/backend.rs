// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use onlyfounders_core::LaunchpadConfig;
use onlyfounders_model::{FormDraft, ProjectId, UserAction};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ActionError, CancelToken, Notification, NotificationKind};

/// A validated investment ready to be sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentOrder {
    pub project_id: ProjectId,
    pub project_name: String,
    pub amount: f64,
    /// The amount exactly as typed; echoed back in the confirmation.
    pub entered: String,
}

/// Side-effecting launchpad operations. Every call can be cancelled through
/// its token; a cancelled call yields `ActionError::Cancelled`.
#[async_trait]
pub trait LaunchpadBackend: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    async fn submit_investment(
        &self,
        order: &InvestmentOrder,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError>;

    async fn submit_project(
        &self,
        draft: &FormDraft,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError>;

    async fn approve_project(
        &self,
        id: &ProjectId,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError>;

    /// `Ok(None)` when the reason is blank; nothing is sent.
    async fn reject_project(
        &self,
        id: &ProjectId,
        reason: &str,
        cancel: CancelToken,
    ) -> Result<Option<Notification>, ActionError>;

    async fn moderate_user(
        &self,
        user_id: &str,
        action: UserAction,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError>;
}

/// Resolves every action after a fixed delay with the site's canned
/// confirmation text.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::from_config(&LaunchpadConfig::default())
    }
}

impl SimulatedBackend {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[must_use]
    pub fn from_config(cfg: &LaunchpadConfig) -> Self {
        Self::new(Duration::from_millis(cfg.simulated_latency_ms))
    }

    async fn settle(&self, action: &'static str, mut cancel: CancelToken) -> Result<(), ActionError> {
        if cancel.is_cancelled() {
            tracing::info!(action, "action cancelled before start");
            return Err(ActionError::Cancelled);
        }
        let latency_ms = u64::try_from(self.latency.as_millis()).unwrap_or(u64::MAX);
        tracing::info!(action, latency_ms, "action started");
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::info!(action, "action cancelled");
                Err(ActionError::Cancelled)
            }
            () = tokio::time::sleep(self.latency) => {
                tracing::info!(action, "action completed");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl LaunchpadBackend for SimulatedBackend {
    fn backend_tag(&self) -> &'static str {
        "simulated"
    }

    async fn submit_investment(
        &self,
        order: &InvestmentOrder,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError> {
        self.settle("submit_investment", cancel).await?;
        Ok(Notification::new(
            NotificationKind::InvestmentConfirmed,
            format!(
                "Successfully invested ${} in {}!",
                order.entered.trim().trim_start_matches('$').trim_start(),
                order.project_name
            ),
        ))
    }

    async fn submit_project(
        &self,
        draft: &FormDraft,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError> {
        self.settle("submit_project", cancel).await?;
        tracing::debug!(project = %draft.project_name, "submission accepted");
        Ok(Notification::new(
            NotificationKind::ProjectSubmitted,
            "Project submitted for review! You'll receive an email confirmation shortly.",
        ))
    }

    async fn approve_project(
        &self,
        id: &ProjectId,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError> {
        self.settle("approve_project", cancel).await?;
        Ok(Notification::new(
            NotificationKind::ProjectApproved,
            format!("Project {id} approved! Notification sent to founder."),
        ))
    }

    async fn reject_project(
        &self,
        id: &ProjectId,
        reason: &str,
        cancel: CancelToken,
    ) -> Result<Option<Notification>, ActionError> {
        let reason = reason.trim();
        if reason.is_empty() {
            tracing::debug!(project = %id, "reject dismissed without a reason");
            return Ok(None);
        }
        self.settle("reject_project", cancel).await?;
        Ok(Some(Notification::new(
            NotificationKind::ProjectRejected,
            format!("Project {id} rejected. Reason: {reason}"),
        )))
    }

    async fn moderate_user(
        &self,
        user_id: &str,
        action: UserAction,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError> {
        self.settle("moderate_user", cancel).await?;
        Ok(Notification::new(
            NotificationKind::UserModerated,
            format!(
                "User {user_id} {} successfully.",
                action.resulting_status()
            ),
        ))
    }
}
