//! Wizard Controller — the 4-step enquiry form state machine.
//!
//! Progresses linearly: ServiceType → ProjectDetails → ContactInfo →
//! AdditionalInfo → submit. Forward navigation is gated on the current
//! step's validity predicate; going back never loses data.

pub mod client;

pub use client::SubmitClient;

use crate::error::WizardError;
use crate::lead::{Lead, generate_reference};

/// The four steps of the enquiry wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ServiceType,
    ProjectDetails,
    ContactInfo,
    AdditionalInfo,
}

impl WizardStep {
    /// 1-based step number, as shown in the progress bar.
    pub fn number(self) -> u8 {
        match self {
            Self::ServiceType => 1,
            Self::ProjectDetails => 2,
            Self::ContactInfo => 3,
            Self::AdditionalInfo => 4,
        }
    }

    /// The next step in the linear progression, if any.
    pub fn next(self) -> Option<WizardStep> {
        match self {
            Self::ServiceType => Some(Self::ProjectDetails),
            Self::ProjectDetails => Some(Self::ContactInfo),
            Self::ContactInfo => Some(Self::AdditionalInfo),
            Self::AdditionalInfo => None,
        }
    }

    /// The previous step, if any.
    pub fn prev(self) -> Option<WizardStep> {
        match self {
            Self::ServiceType => None,
            Self::ProjectDetails => Some(Self::ServiceType),
            Self::ContactInfo => Some(Self::ProjectDetails),
            Self::AdditionalInfo => Some(Self::ContactInfo),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ServiceType => "service_type",
            Self::ProjectDetails => "project_details",
            Self::ContactInfo => "contact_info",
            Self::AdditionalInfo => "additional_info",
        };
        write!(f, "{s}")
    }
}

/// What the confirmation view shows after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub reference: String,
    pub email: String,
}

/// Drives the enquiry form: owns the in-progress [`Lead`], the current
/// step, and the submit/confirmation state.
#[derive(Debug, Default)]
pub struct Wizard {
    lead: Lead,
    step_index: u8,
    submitting: bool,
    submit_error: Option<String>,
    confirmation: Option<Confirmation>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        match self.step_index {
            0 => WizardStep::ServiceType,
            1 => WizardStep::ProjectDetails,
            2 => WizardStep::ContactInfo,
            _ => WizardStep::AdditionalInfo,
        }
    }

    pub fn lead(&self) -> &Lead {
        &self.lead
    }

    /// Mutable access for the free-text and coded fields. Scope and
    /// basement-level edits go through [`toggle_scope`](Self::toggle_scope)
    /// and [`set_rooms`](Self::set_rooms).
    pub fn lead_mut(&mut self) -> &mut Lead {
        &mut self.lead
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Add the scope if absent, remove it if present.
    pub fn toggle_scope(&mut self, scope: &str) {
        if let Some(pos) = self.lead.project_scope.iter().position(|s| s == scope) {
            self.lead.project_scope.remove(pos);
        } else {
            self.lead.project_scope.push(scope.to_string());
        }
    }

    /// Set the basement-level count, clamped to at least 1.
    pub fn set_rooms(&mut self, rooms: u32) {
        self.lead.rooms = rooms.max(1);
    }

    /// The current step's validity predicate. Gates forward navigation
    /// only; an invalid step is not an error.
    pub fn is_step_valid(&self) -> bool {
        match self.step() {
            WizardStep::ServiceType => {
                !self.lead.service_type.is_empty() && !self.lead.property_type.is_empty()
            }
            WizardStep::ProjectDetails => {
                !self.lead.project_scope.is_empty() && !self.lead.timeline.is_empty()
            }
            WizardStep::ContactInfo => {
                !self.lead.first_name.is_empty()
                    && !self.lead.email.is_empty()
                    && !self.lead.phone.is_empty()
            }
            WizardStep::AdditionalInfo => true,
        }
    }

    /// Advance to the next step. A no-op returning `false` when the
    /// current step is invalid or already at the final step.
    pub fn advance(&mut self) -> bool {
        if !self.is_step_valid() {
            return false;
        }
        match self.step().next() {
            Some(_) => {
                self.step_index += 1;
                true
            }
            None => false,
        }
    }

    /// Go back one step, retaining all entered data.
    pub fn back(&mut self) -> bool {
        match self.step().prev() {
            Some(_) => {
                self.step_index -= 1;
                true
            }
            None => false,
        }
    }

    /// Submit the completed record to the dispatcher.
    ///
    /// Generates a fresh reference number per attempt (a retry after
    /// failure gets a new one), then performs the single outbound call.
    /// On failure the form data stays intact and the error message is
    /// retained for display; on success the reference and email are kept
    /// for the confirmation view.
    pub async fn submit(&mut self, client: &SubmitClient) -> Result<&Confirmation, WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if self.step() != WizardStep::AdditionalInfo {
            return Err(WizardError::NotAtFinalStep);
        }

        self.submitting = true;
        self.submit_error = None;
        self.lead.reference_number = generate_reference();

        let outcome = client.send(&self.lead).await;
        self.submitting = false;

        match outcome {
            Ok(_) => {
                let confirmation = Confirmation {
                    reference: self.lead.reference_number.clone(),
                    email: self.lead.email.clone(),
                };
                Ok(&*self.confirmation.insert(confirmation))
            }
            Err(message) => {
                self.submit_error = Some(message.clone());
                Err(WizardError::SubmitFailed(message))
            }
        }
    }

    /// "Submit Another Request": back to step 1 with a pristine record,
    /// no leftover error or reference state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
