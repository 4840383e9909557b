// SPDX-License-Identifier: Apache-2.0

use onlyfounders_funding::format_millions;
use onlyfounders_model::{Catalog, Project, ProjectId};
use onlyfounders_query::{sort_projects, SortKey};
use serde::Serialize;

use super::discover::{project_card, ProjectCard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedProject {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub expected_return: Option<String>,
    pub raised: String,
    pub token_price: f64,
    pub contributors: u32,
    pub days_left: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub stats: Vec<HeadlineStat>,
    pub featured: Option<FeaturedProject>,
    pub trending: Vec<ProjectCard>,
}

fn stat(label: &str, value: String) -> HeadlineStat {
    HeadlineStat {
        label: label.to_string(),
        value,
    }
}

#[must_use]
pub fn home_view(catalog: &Catalog) -> HomeView {
    let stats = vec![
        stat("Projects Funded", catalog.stats.total_projects.to_string()),
        stat(
            "Total Invested",
            format!("${}M", format_millions(catalog.stats.total_funded)),
        ),
        stat("Average Return", format!("{:.1}x", catalog.stats.avg_return)),
    ];
    let featured = catalog.featured().map(|p| FeaturedProject {
        id: p.id.clone(),
        name: p.name.clone(),
        description: p.description.clone(),
        expected_return: p.expected_return.clone(),
        raised: format!("${}M", format_millions(p.committed)),
        token_price: p.token_price,
        contributors: p.contributors,
        days_left: p.days_left,
    });
    let hot: Vec<&Project> = catalog.projects.iter().filter(|p| p.hot).collect();
    let trending = sort_projects(&hot, SortKey::Trending)
        .into_iter()
        .map(project_card)
        .collect();
    HomeView {
        stats,
        featured,
        trending,
    }
}
