pub mod actions;
pub mod manager;
pub mod selector;
pub mod state;
pub mod steps;

#[cfg(test)]
mod tests;

pub use actions::RegistrationAction;
pub use manager::RegistrationManager;
pub use selector::{CountrySelector, SelectorState};
pub use state::RegistrationDraft;
pub use steps::{RegistrationStep, StepNavigator};

// Re-export for convenience
pub mod prelude {
    pub use super::actions::RegistrationAction;
    pub use super::manager::RegistrationManager;
    pub use super::selector::{CountrySelector, SelectorState};
    pub use super::state::RegistrationDraft;
    pub use super::steps::{RegistrationStep, StepNavigator};
}
