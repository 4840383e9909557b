// SPDX-License-Identifier: Apache-2.0

use onlyfounders_funding::format_usd;
use onlyfounders_model::{Category, DraftField, FormDraft};
use serde::Serialize;

use crate::wizard::{FormNavigator, WizardStep, DESCRIPTION_MAX_CHARS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub number: u8,
    pub title: String,
    pub blurb: String,
    pub current: bool,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub key: String,
    pub group: String,
    pub value: String,
    pub required: bool,
    pub missing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub project_name: String,
    pub ticker: String,
    pub category: String,
    pub token_price: String,
    pub total_supply: String,
    pub min_raise: String,
    pub monthly_allowance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateView {
    pub step: u8,
    pub step_title: String,
    pub steps: Vec<StepView>,
    pub fields: Vec<FieldView>,
    pub categories: Vec<String>,
    pub description_counter: String,
    pub missing_required: Vec<String>,
    pub can_go_back: bool,
    pub can_go_next: bool,
    pub can_submit: bool,
    pub submitting: bool,
    pub review: Option<ReviewSummary>,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        placeholder.to_string()
    } else {
        v.to_string()
    }
}

/// Leading integer of `raw` with thousands separators; `"0"` when there is
/// none.
fn grouped_integer(raw: &str) -> String {
    let trimmed = raw.trim();
    let sign_len = usize::from(trimmed.starts_with('-') || trimmed.starts_with('+'));
    let digits_len = trimmed[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .map_or_else(|_| "0".to_string(), |n| format_usd(n as f64))
}

fn review_summary(draft: &FormDraft) -> ReviewSummary {
    ReviewSummary {
        project_name: or_placeholder(&draft.project_name, "Project Name"),
        ticker: or_placeholder(&draft.ticker, "N/A"),
        category: or_placeholder(&draft.category, "N/A"),
        token_price: format!("{} USDC", or_placeholder(&draft.token_price, "0")),
        total_supply: grouped_integer(&draft.total_supply),
        min_raise: format!("{} USDC", grouped_integer(&draft.min_raise)),
        monthly_allowance: format!("${} USDC", grouped_integer(&draft.monthly_allowance)),
    }
}

fn field_view(draft: &FormDraft, field: DraftField) -> FieldView {
    let value = draft.get(field);
    FieldView {
        key: field.key().to_string(),
        group: field.group().title().to_string(),
        value: value.to_string(),
        required: field.is_required(),
        missing: field.is_required() && value.trim().is_empty(),
    }
}

#[must_use]
pub fn create_view(wizard: &FormNavigator, submitting: bool) -> CreateView {
    let step = wizard.step();
    let draft = wizard.draft();
    let steps = WizardStep::ALL
        .into_iter()
        .map(|s| StepView {
            number: s.number(),
            title: s.title().to_string(),
            blurb: s.blurb().to_string(),
            current: s == step,
            complete: s < step,
        })
        .collect();
    CreateView {
        step: step.number(),
        step_title: step.title().to_string(),
        steps,
        fields: step.fields().iter().map(|f| field_view(draft, *f)).collect(),
        categories: Category::SUBMITTABLE
            .into_iter()
            .map(|c| c.as_str().to_string())
            .collect(),
        description_counter: format!(
            "{}/{DESCRIPTION_MAX_CHARS} characters",
            draft.description.chars().count()
        ),
        missing_required: draft
            .missing_required()
            .into_iter()
            .map(|f| f.key().to_string())
            .collect(),
        can_go_back: step != WizardStep::ProjectInfo,
        can_go_next: step != WizardStep::Review,
        can_submit: wizard.can_submit() && !submitting,
        submitting,
        review: (step == WizardStep::Review).then(|| review_summary(draft)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_shows_basic_info_with_required_markers() {
        let view = create_view(&FormNavigator::new(), false);
        assert_eq!(view.step, 1);
        assert_eq!(view.step_title, "Project Info");
        assert!(view.steps[0].current);
        assert!(!view.can_go_back);
        assert!(!view.can_submit);
        let keys: Vec<&str> = view.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["projectName", "ticker", "category", "description"]);
        assert!(view.fields.iter().all(|f| f.required && f.missing));
        assert_eq!(view.categories.len(), 7);
        assert_eq!(view.categories[6], "Investment Fund");
        assert_eq!(view.description_counter, "0/500 characters");
    }

    #[test]
    fn review_step_summarises_with_placeholders() {
        let mut wizard = FormNavigator::new();
        wizard.set_field(DraftField::TotalSupply, "10000000");
        wizard.set_field(DraftField::MinRaise, "800000.75");
        wizard.set_field(DraftField::MonthlyAllowance, "abc");
        wizard.go_to(WizardStep::Review);
        let view = create_view(&wizard, false);
        assert!(view.can_submit);
        assert!(view.fields.is_empty());
        assert!(view.steps[..3].iter().all(|s| s.complete));
        let review = view.review.expect("review");
        assert_eq!(review.project_name, "Project Name");
        assert_eq!(review.ticker, "N/A");
        assert_eq!(review.token_price, "0 USDC");
        assert_eq!(review.total_supply, "10,000,000");
        assert_eq!(review.min_raise, "800,000 USDC");
        assert_eq!(review.monthly_allowance, "$0 USDC");
    }

    #[test]
    fn submit_control_is_disabled_while_submitting() {
        let mut wizard = FormNavigator::new();
        wizard.go_to(WizardStep::Review);
        assert!(!create_view(&wizard, true).can_submit);
    }
}
