// SPDX-License-Identifier: Apache-2.0

use onlyfounders_model::{DraftField, FormDraft};
use serde::{Deserialize, Serialize};

pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    ProjectInfo,
    Tokenomics,
    TeamAndLinks,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        Self::ProjectInfo,
        Self::Tokenomics,
        Self::TeamAndLinks,
        Self::Review,
    ];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::ProjectInfo => 1,
            Self::Tokenomics => 2,
            Self::TeamAndLinks => 3,
            Self::Review => 4,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ProjectInfo => "Project Info",
            Self::Tokenomics => "Tokenomics",
            Self::TeamAndLinks => "Team & Links",
            Self::Review => "Review",
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::ProjectInfo => "Basic project details",
            Self::Tokenomics => "Token economics & funding",
            Self::TeamAndLinks => "Team info & social links",
            Self::Review => "Review & submit",
        }
    }

    /// Fields edited on this step, in display order. Review edits nothing.
    #[must_use]
    pub const fn fields(self) -> &'static [DraftField] {
        match self {
            Self::ProjectInfo => &[
                DraftField::ProjectName,
                DraftField::Ticker,
                DraftField::Category,
                DraftField::Description,
            ],
            Self::Tokenomics => &[
                DraftField::TotalSupply,
                DraftField::TokenPrice,
                DraftField::MinRaise,
                DraftField::MaxRaise,
                DraftField::MonthlyAllowance,
                DraftField::CampaignDuration,
                DraftField::VestingPeriod,
                DraftField::UseOfFunds,
            ],
            Self::TeamAndLinks => &[
                DraftField::TeamSize,
                DraftField::Website,
                DraftField::Twitter,
                DraftField::Discord,
                DraftField::Github,
                DraftField::Whitepaper,
            ],
            Self::Review => &[],
        }
    }

    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == n)
    }

    const fn next(self) -> Self {
        match self {
            Self::ProjectInfo => Self::Tokenomics,
            Self::Tokenomics => Self::TeamAndLinks,
            Self::TeamAndLinks | Self::Review => Self::Review,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::ProjectInfo | Self::Tokenomics => Self::ProjectInfo,
            Self::TeamAndLinks => Self::Tokenomics,
            Self::Review => Self::TeamAndLinks,
        }
    }
}

/// Step state and draft for the project submission wizard. Blank required
/// fields never block movement between steps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormNavigator {
    step: WizardStep,
    draft: FormDraft,
}

impl FormNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn next(&mut self) -> WizardStep {
        self.step = self.step.next();
        self.step
    }

    pub fn previous(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Jumps straight to a step; used when restoring a session.
    pub fn go_to(&mut self, step: WizardStep) {
        self.step = step;
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Review
    }

    /// The draft to send, available only on the review step.
    #[must_use]
    pub fn submission(&self) -> Option<&FormDraft> {
        self.can_submit().then_some(&self.draft)
    }

    /// Called once a submission has been accepted.
    pub fn reset(&mut self) {
        self.step = WizardStep::ProjectInfo;
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onlyfounders_model::FieldGroup;

    #[test]
    fn steps_clamp_at_both_ends() {
        let mut nav = FormNavigator::new();
        assert_eq!(nav.step().number(), 1);
        assert_eq!(nav.previous().number(), 1);
        assert_eq!(nav.next().number(), 2);
        assert_eq!(nav.next().number(), 3);
        assert_eq!(nav.next().number(), 4);
        assert_eq!(nav.next().number(), 4);
        assert_eq!(nav.previous().number(), 3);
    }

    #[test]
    fn empty_required_fields_do_not_block_advancing() {
        let mut nav = FormNavigator::new();
        assert!(!nav.draft().missing_required().is_empty());
        for _ in 0..3 {
            nav.next();
        }
        assert!(nav.can_submit());
        assert!(nav.submission().is_some());
    }

    #[test]
    fn submission_is_only_offered_on_review() {
        let mut nav = FormNavigator::new();
        nav.set_field(DraftField::ProjectName, "LiquidBridge");
        assert!(nav.submission().is_none());
        nav.go_to(WizardStep::Review);
        assert_eq!(
            nav.submission().map(|d| d.project_name.as_str()),
            Some("LiquidBridge")
        );
        nav.reset();
        assert_eq!(nav.step(), WizardStep::ProjectInfo);
        assert!(nav.draft().is_empty());
    }

    #[test]
    fn editing_steps_cover_every_field_once() {
        let mut seen: Vec<DraftField> = WizardStep::ALL
            .into_iter()
            .flat_map(|s| s.fields().iter().copied())
            .collect();
        seen.sort();
        let mut all = DraftField::ALL.to_vec();
        all.sort();
        assert_eq!(seen, all);
        assert!(WizardStep::ProjectInfo
            .fields()
            .iter()
            .all(|f| f.group() == FieldGroup::BasicInfo));
        assert_eq!(WizardStep::from_number(3), Some(WizardStep::TeamAndLinks));
        assert_eq!(WizardStep::from_number(5), None);
    }
}
