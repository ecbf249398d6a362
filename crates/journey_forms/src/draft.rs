//! Editable form drafts for journey templates. Drafts hold raw field input
//! (numbers as strings, untrimmed text) and validate into a [`TemplatePayload`]
//! before anything is sent to the backend. The first invalid field blocks
//! submission.

use thiserror::Error;

use crate::types::{JourneyKind, JourneyStep, JourneyTemplate, StepKind, TemplatePayload};

#[derive(Clone, Debug, PartialEq)]
pub struct StepDraft {
    pub title: String,
    pub description: String,
    pub kind: StepKind,
    pub responsible_role: String,
    pub due_days: String,
}

impl StepDraft {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            kind: StepKind::Task,
            responsible_role: String::new(),
            due_days: "1".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateDraft {
    pub journey_type: JourneyKind,
    pub title: String,
    pub description: String,
    pub department: String,
    pub business_unit: String,
    pub estimated_duration_days: String,
    pub steps: Vec<StepDraft>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Template title is required.")]
    MissingTitle,
    #[error("Department is required.")]
    MissingDepartment,
    #[error("Estimated duration must be a positive number of days.")]
    InvalidDuration,
    #[error("At least one step is required.")]
    NoSteps,
    #[error("Step {0}: title is required.")]
    StepMissingTitle(usize),
    #[error("Step {0}: responsible role is required.")]
    StepMissingRole(usize),
    #[error("Step {0}: due day must be a positive number.")]
    StepInvalidDueDay(usize),
    #[error("Step {0}: due day exceeds the estimated duration.")]
    StepBeyondDuration(usize),
}

impl TemplateDraft {
    /// Empty draft with a single blank step, matching the create form's
    /// initial state.
    pub fn blank(journey_type: JourneyKind) -> Self {
        Self {
            journey_type,
            title: String::new(),
            description: String::new(),
            department: String::new(),
            business_unit: String::new(),
            estimated_duration_days: "30".to_string(),
            steps: vec![StepDraft::blank()],
        }
    }

    /// Draft pre-filled from an existing template, for the edit screen.
    pub fn from_template(template: &JourneyTemplate) -> Self {
        Self {
            journey_type: template.journey_type,
            title: template.title.clone(),
            description: template.description.clone(),
            department: template.department.clone().unwrap_or_default(),
            business_unit: template.business_unit.clone().unwrap_or_default(),
            estimated_duration_days: template.estimated_duration_days.to_string(),
            steps: template
                .steps
                .iter()
                .map(|step| StepDraft {
                    title: step.title.clone(),
                    description: step.description.clone(),
                    kind: step.kind,
                    responsible_role: step.responsible_role.clone(),
                    due_days: step.due_day_offset.to_string(),
                })
                .collect(),
        }
    }

    /// Validates the draft and produces the request payload. Step indices in
    /// errors are one-based for display.
    pub fn validate(&self) -> Result<TemplatePayload, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let department = self.department.trim();
        if department.is_empty() {
            return Err(DraftError::MissingDepartment);
        }

        let duration: u32 = self
            .estimated_duration_days
            .trim()
            .parse()
            .ok()
            .filter(|days| *days > 0)
            .ok_or(DraftError::InvalidDuration)?;

        if self.steps.is_empty() {
            return Err(DraftError::NoSteps);
        }

        let mut steps = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            let position = index + 1;
            let step_title = step.title.trim();
            if step_title.is_empty() {
                return Err(DraftError::StepMissingTitle(position));
            }
            let role = step.responsible_role.trim();
            if role.is_empty() {
                return Err(DraftError::StepMissingRole(position));
            }
            let due_day_offset: u32 = step
                .due_days
                .trim()
                .parse()
                .ok()
                .filter(|day| *day > 0)
                .ok_or(DraftError::StepInvalidDueDay(position))?;
            if due_day_offset > duration {
                return Err(DraftError::StepBeyondDuration(position));
            }

            steps.push(JourneyStep {
                title: step_title.to_string(),
                description: step.description.trim().to_string(),
                kind: step.kind,
                responsible_role: role.to_string(),
                due_day_offset,
            });
        }

        let business_unit = self.business_unit.trim();
        Ok(TemplatePayload {
            journey_type: self.journey_type,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            department: Some(department.to_string()),
            business_unit: (!business_unit.is_empty()).then(|| business_unit.to_string()),
            estimated_duration_days: duration,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftError, StepDraft, TemplateDraft};
    use crate::types::{JourneyKind, StepKind};

    fn filled_draft() -> TemplateDraft {
        TemplateDraft {
            journey_type: JourneyKind::Onboarding,
            title: "  Engineering onboarding  ".to_string(),
            description: "First month for new engineers.".to_string(),
            department: "Engineering".to_string(),
            business_unit: String::new(),
            estimated_duration_days: "30".to_string(),
            steps: vec![
                StepDraft {
                    title: "Sign policies".to_string(),
                    description: String::new(),
                    kind: StepKind::Document,
                    responsible_role: "HR".to_string(),
                    due_days: "1".to_string(),
                },
                StepDraft {
                    title: "Laptop setup".to_string(),
                    description: "Standard image".to_string(),
                    kind: StepKind::Access,
                    responsible_role: "IT".to_string(),
                    due_days: "3".to_string(),
                },
            ],
        }
    }

    #[test]
    fn valid_draft_produces_a_trimmed_payload() {
        let payload = filled_draft().validate().expect("draft should validate");
        assert_eq!(payload.title, "Engineering onboarding");
        assert_eq!(payload.department.as_deref(), Some("Engineering"));
        assert_eq!(payload.business_unit, None);
        assert_eq!(payload.estimated_duration_days, 30);
        assert_eq!(payload.steps.len(), 2);
        assert_eq!(payload.steps[1].due_day_offset, 3);
    }

    #[test]
    fn missing_title_blocks_validation() {
        let mut draft = filled_draft();
        draft.title = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingTitle));
    }

    #[test]
    fn non_numeric_duration_is_rejected() {
        let mut draft = filled_draft();
        draft.estimated_duration_days = "a month".to_string();
        assert_eq!(draft.validate(), Err(DraftError::InvalidDuration));

        draft.estimated_duration_days = "0".to_string();
        assert_eq!(draft.validate(), Err(DraftError::InvalidDuration));
    }

    #[test]
    fn step_errors_carry_one_based_positions() {
        let mut draft = filled_draft();
        draft.steps[1].responsible_role = String::new();
        assert_eq!(draft.validate(), Err(DraftError::StepMissingRole(2)));

        let mut draft = filled_draft();
        draft.steps[0].due_days = "-1".to_string();
        assert_eq!(draft.validate(), Err(DraftError::StepInvalidDueDay(1)));
    }

    #[test]
    fn step_due_day_cannot_exceed_duration() {
        let mut draft = filled_draft();
        draft.steps[1].due_days = "45".to_string();
        assert_eq!(draft.validate(), Err(DraftError::StepBeyondDuration(2)));
    }

    #[test]
    fn draft_round_trips_through_a_template() {
        let payload = filled_draft().validate().expect("draft should validate");
        let template = crate::types::JourneyTemplate {
            id: "3f6c".to_string(),
            journey_type: payload.journey_type,
            title: payload.title.clone(),
            description: payload.description.clone(),
            department: payload.department.clone(),
            business_unit: payload.business_unit.clone(),
            estimated_duration_days: payload.estimated_duration_days,
            is_active: true,
            steps: payload.steps.clone(),
            created_at: None,
            updated_at: None,
        };

        let draft = TemplateDraft::from_template(&template);
        assert_eq!(draft.title, "Engineering onboarding");
        assert_eq!(draft.steps.len(), 2);
        assert_eq!(draft.validate().expect("round-trip validates"), payload);
    }
}
