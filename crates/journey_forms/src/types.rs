//! Wire types for journey templates. Field names follow the backend's JSON
//! contract; `type` is reserved in Rust so the step kind is renamed on the
//! wire.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyKind {
    Onboarding,
    Offboarding,
}

impl JourneyKind {
    pub fn label(self) -> &'static str {
        match self {
            JourneyKind::Onboarding => "Onboarding",
            JourneyKind::Offboarding => "Offboarding",
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            JourneyKind::Onboarding => "onboarding",
            JourneyKind::Offboarding => "offboarding",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Task,
    Document,
    Meeting,
    Training,
    Access,
}

impl StepKind {
    pub const ALL: [StepKind; 5] = [
        StepKind::Task,
        StepKind::Document,
        StepKind::Meeting,
        StepKind::Training,
        StepKind::Access,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StepKind::Task => "Task",
            StepKind::Document => "Document",
            StepKind::Meeting => "Meeting",
            StepKind::Training => "Training",
            StepKind::Access => "Access",
        }
    }

    pub fn wire_value(self) -> &'static str {
        match self {
            StepKind::Task => "task",
            StepKind::Document => "document",
            StepKind::Meeting => "meeting",
            StepKind::Training => "training",
            StepKind::Access => "access",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.wire_value() == value)
    }
}

/// One ordered step of a journey. `due_day_offset` counts from the journey
/// start date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JourneyStep {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub responsible_role: String,
    pub due_day_offset: u32,
}

/// A journey template as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JourneyTemplate {
    pub id: String,
    pub journey_type: JourneyKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub business_unit: Option<String>,
    pub estimated_duration_days: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub steps: Vec<JourneyStep>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Create/update request body; id and audit fields are backend-owned.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplatePayload {
    pub journey_type: JourneyKind,
    pub title: String,
    pub description: String,
    pub department: Option<String>,
    pub business_unit: Option<String>,
    pub estimated_duration_days: u32,
    pub steps: Vec<JourneyStep>,
}

#[cfg(test)]
mod tests {
    use super::{JourneyKind, JourneyStep, JourneyTemplate, StepKind};

    #[test]
    fn step_kind_round_trips_through_the_wire_name() {
        for kind in StepKind::ALL {
            assert_eq!(StepKind::from_wire(kind.wire_value()), Some(kind));
        }
        assert_eq!(StepKind::from_wire("unknown"), None);
    }

    #[test]
    fn step_serializes_kind_under_the_type_key() {
        let step = JourneyStep {
            title: "Collect laptop".to_string(),
            description: String::new(),
            kind: StepKind::Task,
            responsible_role: "IT".to_string(),
            due_day_offset: 3,
        };

        let json = serde_json::to_value(&step).expect("Failed to serialize");
        assert_eq!(json["type"], "task");
        assert_eq!(json["due_day_offset"], 3);
    }

    #[test]
    fn template_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "3f6c",
            "journey_type": "offboarding",
            "title": "Engineering exit",
            "estimated_duration_days": 14
        }"#;

        let template: JourneyTemplate =
            serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(template.journey_type, JourneyKind::Offboarding);
        assert!(template.is_active);
        assert!(template.steps.is_empty());
        assert_eq!(template.department, None);
    }
}
