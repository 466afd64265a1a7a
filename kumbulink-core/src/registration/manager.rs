use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::{RegistrationAction, RegistrationDraft, RegistrationStep, StepNavigator};

/// Shared context for the registration steps.
///
/// Step views read the draft and the current step, and dispatch actions;
/// `update` applies them in order once per frame.
pub struct RegistrationManager {
    // Current state - single source of truth
    draft: RegistrationDraft,
    steps: StepNavigator,

    // Action queue for sequential processing
    pending_actions: VecDeque<RegistrationAction>,
}

impl Default for RegistrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationManager {
    pub fn new() -> Self {
        Self {
            draft: RegistrationDraft::default(),
            steps: StepNavigator::default(),
            pending_actions: VecDeque::new(),
        }
    }

    /// UI calls this - synchronous, just queues the action
    pub fn dispatch(&mut self, action: RegistrationAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Applies every queued action.
    pub fn update(&mut self) {
        while let Some(action) = self.pending_actions.pop_front() {
            self.handle_action(action);
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn current_step(&self) -> u32 {
        self.steps.current_step()
    }

    pub fn step(&self) -> RegistrationStep {
        self.steps.step()
    }

    pub fn can_go_back(&self) -> bool {
        self.steps.can_go_back()
    }

    pub fn progress(&self) -> f32 {
        self.steps.progress()
    }

    /// Evaluated on every call so the submit button tracks the clock and the
    /// latest edits.
    pub fn is_form_valid(&self) -> bool {
        self.is_form_valid_at(Utc::now())
    }

    pub fn is_form_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.draft.is_form_valid(now)
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    fn handle_action(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::NextStep => {
                self.steps.next_step();
                log::info!("Advanced to step: {}", self.steps.current_step());
            }
            RegistrationAction::PrevStep => {
                self.steps.prev_step();
                log::info!("Went back to step: {}", self.steps.current_step());
            }
            RegistrationAction::Reset => {
                self.draft = RegistrationDraft::default();
                self.steps = StepNavigator::default();
                self.pending_actions.clear();
                log::info!("Registration state reset");
            }
            RegistrationAction::SetFullName(name) => {
                self.draft.set_full_name(name);
            }
            RegistrationAction::SetDateOfBirth(date) => {
                self.draft.set_date_of_birth(date);
            }
            RegistrationAction::SelectCountry(country) => {
                self.draft.select_country(country);
                log::info!("Country selected: {}", country.country().name);
            }
            RegistrationAction::SelectDocumentType(document_type) => {
                if !self.draft.select_document_type(&document_type) {
                    log::warn!("Ignoring document type not offered for country: {}", document_type);
                }
            }
            RegistrationAction::SetDocumentNumber(number) => {
                self.draft.set_document_number(number);
                log::debug!("Document number valid: {}", self.draft.document_number_valid);
            }
            RegistrationAction::SetTermsAccepted(accepted) => {
                self.draft.set_terms_accepted(accepted);
            }
        }
    }
}
