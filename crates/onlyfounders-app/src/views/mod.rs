// SPDX-License-Identifier: Apache-2.0

//! Serializable snapshots of each page. The CLI prints them as text or
//! JSON; nothing here mutates state.

mod admin;
mod create;
mod discover;
mod home;
mod portfolio;
mod project;

use serde::Serialize;

pub use admin::{admin_view, AdminTab, AdminView, ApprovedRow, UserRow};
pub use create::{create_view, CreateView, FieldView, ReviewSummary, StepView};
pub use discover::{discover_view, project_card, DiscoverView, FilterOption, ProjectCard};
pub use home::{home_view, FeaturedProject, HeadlineStat, HomeView};
pub use portfolio::{portfolio_view, HoldingRow, LaunchedRow, PortfolioTab, PortfolioView};
pub use project::{project_view, InvestmentPanel, ProjectPageView};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Discover(DiscoverView),
    Create(CreateView),
    Portfolio(PortfolioView),
    Admin(AdminView),
    Project(Box<ProjectPageView>),
}
