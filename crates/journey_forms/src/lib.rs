mod draft;
mod types;

pub use draft::{DraftError, StepDraft, TemplateDraft};
pub use types::{JourneyKind, JourneyStep, JourneyTemplate, StepKind, TemplatePayload};
