// SPDX-License-Identifier: Apache-2.0

use onlyfounders_core::LaunchpadConfig;
use onlyfounders_funding::{parse_amount, InvestmentLimits};
use onlyfounders_model::{Catalog, DraftField, ProjectId, UserAction, ValidationError};
use onlyfounders_query::{CatalogFilter, FilterState, SortKey};

use crate::actions::{
    ActionError, ActionGate, CancelToken, InvestmentOrder, LaunchpadBackend, Notification,
};
use crate::router::{resolve_project_page, Navigator, Page};
use crate::views::{
    admin_view, create_view, discover_view, home_view, portfolio_view, project_view, AdminTab,
    PageView, PortfolioTab,
};
use crate::wizard::FormNavigator;

/// Everything a visitor's session holds: the catalog, the current page,
/// per-page controls and the backend that carries out actions.
pub struct Launchpad<B> {
    catalog: Catalog,
    config: LaunchpadConfig,
    backend: B,
    navigator: Navigator,
    filters: FilterState,
    wizard: FormNavigator,
    investment_amount: String,
    portfolio_tab: PortfolioTab,
    admin_tab: AdminTab,
    admin_filter: CatalogFilter,
    invest_gate: ActionGate,
    submit_gate: ActionGate,
    admin_gate: ActionGate,
    notifications: Vec<Notification>,
}

impl<B: LaunchpadBackend> Launchpad<B> {
    #[must_use]
    pub fn new(catalog: Catalog, config: LaunchpadConfig, backend: B) -> Self {
        let filters = FilterState {
            sort: SortKey::from_key(&config.default_sort),
            ..FilterState::default()
        };
        tracing::debug!(backend = backend.backend_tag(), "launchpad session created");
        Self {
            catalog,
            config,
            backend,
            navigator: Navigator::new(),
            filters,
            wizard: FormNavigator::new(),
            investment_amount: String::new(),
            portfolio_tab: PortfolioTab::default(),
            admin_tab: AdminTab::default(),
            admin_filter: CatalogFilter::default(),
            invest_gate: ActionGate::new(),
            submit_gate: ActionGate::new(),
            admin_gate: ActionGate::new(),
            notifications: Vec::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &LaunchpadConfig {
        &self.config
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn wizard(&self) -> &FormNavigator {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut FormNavigator {
        &mut self.wizard
    }

    #[must_use]
    pub fn investment_amount(&self) -> &str {
        &self.investment_amount
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn invest_gate(&self) -> &ActionGate {
        &self.invest_gate
    }

    #[must_use]
    pub fn submit_gate(&self) -> &ActionGate {
        &self.submit_gate
    }

    #[must_use]
    pub fn admin_gate(&self) -> &ActionGate {
        &self.admin_gate
    }

    pub fn navigate(&mut self, page: Page) {
        self.navigator.navigate(page);
    }

    pub fn open_project(&mut self, id: &str) -> Result<(), ValidationError> {
        self.navigator.open_project(ProjectId::parse(id)?);
        Ok(())
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    pub fn set_portfolio_tab(&mut self, tab: PortfolioTab) {
        self.portfolio_tab = tab;
    }

    pub fn set_admin_tab(&mut self, tab: AdminTab) {
        self.admin_tab = tab;
    }

    pub fn set_admin_filter(&mut self, filter: CatalogFilter) {
        self.admin_filter = filter;
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.wizard.set_field(field, value);
    }

    pub fn set_investment_amount(&mut self, text: impl Into<String>) {
        self.investment_amount = text.into();
    }

    /// Fills the amount from the configured quick-pick buttons.
    pub fn apply_quick_amount(&mut self, index: usize) -> Option<f64> {
        let amount = *self.config.quick_amounts.get(index)?;
        self.investment_amount = amount.to_string();
        Some(amount)
    }

    #[must_use]
    pub fn render(&self) -> PageView {
        match self.navigator.page() {
            Page::Home => PageView::Home(home_view(&self.catalog)),
            Page::Discover => PageView::Discover(discover_view(&self.catalog, &self.filters)),
            Page::Create => PageView::Create(create_view(
                &self.wizard,
                self.submit_gate.is_in_flight(),
            )),
            Page::Portfolio => {
                PageView::Portfolio(portfolio_view(&self.catalog, self.portfolio_tab))
            }
            Page::Admin => PageView::Admin(admin_view(
                &self.catalog,
                self.admin_tab,
                &self.admin_filter,
            )),
            Page::Project => match resolve_project_page(
                &self.catalog,
                self.navigator.selected_project(),
                &self.config.default_project,
            ) {
                Some((project, detail)) => PageView::Project(Box::new(project_view(
                    project,
                    detail,
                    &self.config.quick_amounts,
                    &self.investment_amount,
                    self.invest_gate.is_in_flight(),
                ))),
                None => PageView::Home(home_view(&self.catalog)),
            },
        }
    }

    /// Invests the typed amount in the project on screen. The amount is
    /// cleared once the backend confirms.
    pub async fn invest(&mut self, cancel: CancelToken) -> Result<Notification, ActionError> {
        let id = self
            .navigator
            .selected_project()
            .map_or(self.config.default_project.as_str(), ProjectId::as_str);
        let project = self.catalog.project(id).ok_or_else(|| {
            tracing::warn!(project = id, "invest in unknown project");
            ActionError::Validation(ValidationError(format!("no project with id `{id}`")))
        })?;
        if self.catalog.detail(id).is_none() {
            tracing::warn!(project = id, "invest in project without a funding page");
            return Err(ActionError::Validation(ValidationError(format!(
                "project `{id}` has no funding page"
            ))));
        }
        let amount = parse_amount(&self.investment_amount);
        if let Err(rejection) = InvestmentLimits::for_project(project).check(amount) {
            tracing::warn!(project = %project.id, amount, reason = rejection.code(), "investment rejected");
            return Err(rejection.into());
        }
        let order = InvestmentOrder {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            amount,
            entered: self.investment_amount.clone(),
        };
        let _guard = self.invest_gate.try_acquire()?;
        let note = self.backend.submit_investment(&order, cancel).await?;
        self.investment_amount.clear();
        self.notifications.push(note.clone());
        Ok(note)
    }

    /// Sends the draft from the review step; the wizard resets on success.
    pub async fn submit_project(&mut self, cancel: CancelToken) -> Result<Notification, ActionError> {
        let Some(draft) = self.wizard.submission().cloned() else {
            tracing::warn!(step = self.wizard.step().number(), "submit outside review step");
            return Err(ActionError::Validation(ValidationError(
                "projects can only be submitted from the review step".to_string(),
            )));
        };
        let missing = draft.missing_required();
        if !missing.is_empty() {
            tracing::debug!(missing = missing.len(), "submitting with blank required fields");
        }
        let _guard = self.submit_gate.try_acquire()?;
        let note = self.backend.submit_project(&draft, cancel).await?;
        self.wizard.reset();
        self.notifications.push(note.clone());
        Ok(note)
    }

    fn pending_id(&self, id: &str) -> Result<ProjectId, ActionError> {
        self.catalog
            .pending_project(id)
            .map(|p| p.id.clone())
            .ok_or_else(|| {
                tracing::warn!(project = id, "unknown pending project");
                ActionError::Validation(ValidationError(format!(
                    "no pending project with id `{id}`"
                )))
            })
    }

    pub async fn approve_project(
        &mut self,
        id: &str,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError> {
        let id = self.pending_id(id)?;
        let _guard = self.admin_gate.try_acquire()?;
        let note = self.backend.approve_project(&id, cancel).await?;
        self.notifications.push(note.clone());
        Ok(note)
    }

    /// `Ok(None)` when the reason is blank, mirroring a dismissed prompt.
    pub async fn reject_project(
        &mut self,
        id: &str,
        reason: &str,
        cancel: CancelToken,
    ) -> Result<Option<Notification>, ActionError> {
        let id = self.pending_id(id)?;
        let _guard = self.admin_gate.try_acquire()?;
        let note = self.backend.reject_project(&id, reason, cancel).await?;
        if let Some(n) = &note {
            self.notifications.push(n.clone());
        }
        Ok(note)
    }

    pub async fn moderate_user(
        &mut self,
        user_id: &str,
        action: UserAction,
        cancel: CancelToken,
    ) -> Result<Notification, ActionError> {
        if self.catalog.user(user_id).is_none() {
            tracing::warn!(user = user_id, "unknown user");
            return Err(ActionError::Validation(ValidationError(format!(
                "no user with id `{user_id}`"
            ))));
        }
        let _guard = self.admin_gate.try_acquire()?;
        let note = self.backend.moderate_user(user_id, action, cancel).await?;
        self.notifications.push(note.clone());
        Ok(note)
    }
}
