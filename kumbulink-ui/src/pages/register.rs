use chrono::NaiveDate;
use eframe::egui;
use kumbulink_core::pointer::PointerEvents;
use kumbulink_core::registration::prelude::*;
use kumbulink_core::routes::Route;

use crate::widgets::country_selector;

const DOCUMENT_PLACEHOLDER: &str = "Selecione o tipo de documento";
const DATE_OF_BIRTH_PLACEHOLDER: &str = "Data de nascimento";

/// Display format for the date picker. Without a `%` specifier chrono renders
/// the string as is, so an unset date shows the placeholder instead of the
/// picker's seed date.
fn date_of_birth_format(date_of_birth: Option<NaiveDate>) -> &'static str {
    match date_of_birth {
        Some(_) => "%d/%m/%Y",
        None => DATE_OF_BIRTH_PLACEHOLDER,
    }
}

/// Three-step sign-up flow. Every step view reads and writes through the one
/// `RegistrationManager` owned here.
pub struct RegisterPage {
    manager: RegistrationManager,
    selector: CountrySelector,
}

impl RegisterPage {
    pub fn mount(events: &PointerEvents) -> Self {
        let mut selector = CountrySelector::new();
        selector.mount(events);
        Self {
            manager: RegistrationManager::new(),
            selector,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        self.manager.update();
        let mut next = None;

        ui.horizontal(|ui| {
            if self.manager.can_go_back() && ui.button("←").clicked() {
                self.manager.dispatch(RegistrationAction::PrevStep);
            }
            ui.heading(self.manager.step().title());
        });
        ui.add(egui::ProgressBar::new(self.manager.progress()).desired_height(6.0));
        ui.add_space(12.0);

        egui::ScrollArea::vertical().show(ui, |ui| match self.manager.step() {
            RegistrationStep::Welcome => self.render_welcome(ui),
            RegistrationStep::PersonalData => self.render_personal_data(ui),
            RegistrationStep::Confirmation => {
                if self.render_confirmation(ui) {
                    self.manager.dispatch(RegistrationAction::Reset);
                    next = Some(Route::Login);
                }
            }
        });

        next
    }

    fn render_welcome(&mut self, ui: &mut egui::Ui) {
        ui.label("Troque moeda diretamente com outras pessoas, sem intermediários.");
        ui.add_space(8.0);
        ui.label("Vamos precisar de alguns dados pessoais e de um documento de identificação.");
        ui.add_space(16.0);

        if ui.button("Começar").clicked() {
            self.manager.dispatch(RegistrationAction::NextStep);
        }
    }

    fn render_personal_data(&mut self, ui: &mut egui::Ui) {
        let draft = self.manager.draft().clone();
        let mut actions = Vec::new();

        ui.label("Nome completo");
        let mut full_name = draft.full_name.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut full_name).hint_text("Nome e apelido"))
            .changed()
        {
            actions.push(RegistrationAction::SetFullName(full_name));
        }
        if !draft.full_name.is_empty() && !draft.name_is_valid() {
            ui.small("Indique o nome e o apelido.");
        }
        ui.add_space(8.0);

        ui.label("Data de nascimento");
        let mut date_of_birth = draft
            .date_of_birth
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default());
        if ui
            .add(
                egui_extras::DatePickerButton::new(&mut date_of_birth)
                    .format(date_of_birth_format(draft.date_of_birth)),
            )
            .changed()
        {
            actions.push(RegistrationAction::SetDateOfBirth(Some(date_of_birth)));
        }
        if draft.date_of_birth.is_some() && !draft.date_of_birth_is_valid(chrono::Utc::now()) {
            ui.colored_label(egui::Color32::RED, "A data de nascimento tem de ser no passado.");
        }
        ui.add_space(8.0);

        ui.label("País emissor do documento");
        if let Some(country) = country_selector(ui, &mut self.selector, draft.selected_country) {
            actions.push(RegistrationAction::SelectCountry(country));
        }
        ui.add_space(8.0);

        ui.label("Tipo de documento");
        ui.add_enabled_ui(draft.document_type_enabled(), |ui| {
            let selected_text = draft
                .selected_document_type
                .as_deref()
                .unwrap_or(DOCUMENT_PLACEHOLDER);
            egui::ComboBox::new("document_type", "")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for option in draft.document_options() {
                        let is_selected = draft.selected_document_type.as_deref() == Some(*option);
                        if ui.selectable_label(is_selected, *option).clicked() {
                            actions.push(RegistrationAction::SelectDocumentType(option.to_string()));
                        }
                    }
                });
        });
        ui.add_space(8.0);

        if draft.document_number_enabled() {
            ui.label("Número do documento");
            let mut number = draft.document_number.clone();
            if ui.text_edit_singleline(&mut number).changed() {
                actions.push(RegistrationAction::SetDocumentNumber(number));
            }
            if !draft.document_number.is_empty() {
                if draft.document_number_valid {
                    ui.colored_label(egui::Color32::DARK_GREEN, "✔ Documento válido");
                } else {
                    ui.colored_label(egui::Color32::RED, "Número de documento inválido");
                }
            }
        } else {
            ui.small("Escolha o país e o tipo de documento para indicar o número.");
        }
        ui.add_space(8.0);

        let mut terms = draft.terms_accepted;
        if ui
            .checkbox(&mut terms, "Li e aceito os termos e condições")
            .changed()
        {
            actions.push(RegistrationAction::SetTermsAccepted(terms));
        }
        ui.add_space(16.0);

        // Evaluated every frame against the clock and the latest edits.
        let can_submit = self.manager.is_form_valid();
        if ui
            .add_enabled(can_submit, egui::Button::new("Seguir para validação"))
            .clicked()
        {
            actions.push(RegistrationAction::NextStep);
        }

        for action in actions {
            self.manager.dispatch(action);
        }
    }

    /// Returns true when the user finished the flow.
    fn render_confirmation(&mut self, ui: &mut egui::Ui) -> bool {
        let draft = self.manager.draft();

        ui.label("Confirme os seus dados antes de concluir.");
        ui.add_space(8.0);

        egui::Grid::new("registration_summary")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Nome:");
                ui.strong(&draft.full_name);
                ui.end_row();

                ui.label("Data de nascimento:");
                ui.strong(
                    draft
                        .date_of_birth
                        .map(|d| d.format("%d/%m/%Y").to_string())
                        .unwrap_or_default(),
                );
                ui.end_row();

                ui.label("País:");
                ui.strong(draft.country().map(|c| c.name).unwrap_or_default());
                ui.end_row();

                ui.label("Documento:");
                ui.strong(format!(
                    "{} {}",
                    draft.selected_document_type.as_deref().unwrap_or_default(),
                    draft.document_number
                ));
                ui.end_row();
            });

        ui.add_space(16.0);
        ui.button("Concluir").clicked()
    }
}

impl Drop for RegisterPage {
    fn drop(&mut self) {
        self.selector.unmount();
    }
}
