use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStep {
    Welcome,
    PersonalData,
    Confirmation,
}

impl RegistrationStep {
    pub fn from_number(step: u32) -> Self {
        match step {
            0 | 1 => Self::Welcome,
            2 => Self::PersonalData,
            _ => Self::Confirmation,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Criar conta",
            Self::PersonalData => "Insira seus dados",
            Self::Confirmation => "Validação",
        }
    }
}

/// Position in the registration flow, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepNavigator {
    current_step: u32,
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self {
            current_step: Self::FIRST_STEP,
        }
    }
}

impl StepNavigator {
    pub const FIRST_STEP: u32 = 1;
    pub const LAST_STEP: u32 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn step(&self) -> RegistrationStep {
        RegistrationStep::from_number(self.current_step)
    }

    pub fn next_step(&mut self) {
        if self.current_step < Self::LAST_STEP {
            self.current_step += 1;
        }
    }

    pub fn prev_step(&mut self) {
        if self.current_step > Self::FIRST_STEP {
            self.current_step -= 1;
        }
    }

    /// The back control is hidden on the first step.
    pub fn can_go_back(&self) -> bool {
        self.current_step > Self::FIRST_STEP
    }

    pub fn progress(&self) -> f32 {
        self.current_step as f32 / Self::LAST_STEP as f32
    }
}
