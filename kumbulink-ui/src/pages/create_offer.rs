use eframe::egui;
use kumbulink_core::routes::Route;
use kumbulink_core::task::MountedTask;
use kumbulink_core::{ApiError, ExchangeOffer, NewOffer};

use super::PageContext;

pub struct CreateOfferPage {
    draft: NewOffer,
    publishing: Option<MountedTask<Result<ExchangeOffer, ApiError>>>,
    error: Option<String>,
}

impl Default for CreateOfferPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateOfferPage {
    pub fn new() -> Self {
        Self {
            draft: NewOffer::new(),
            publishing: None,
            error: None,
        }
    }

    pub fn is_publishing(&self) -> bool {
        self.publishing.is_some()
    }

    fn publish(&mut self, ctx: &PageContext) {
        let client = ctx.client.clone();
        let draft = self.draft.clone();
        self.error = None;
        self.publishing = Some(MountedTask::spawn(async move {
            client.create_offer(&draft).await
        }));
    }

    /// Returns the new offer's route once the request lands.
    fn update_from_async(&mut self) -> Option<Route> {
        let result = self.publishing.as_mut()?.try_take()?;
        self.publishing = None;

        match result {
            Ok(offer) => Some(Route::OfferDetail(offer.id)),
            Err(ApiError::Unauthenticated) => {
                self.error = Some("Inicie sessão para publicar anúncios.".to_string());
                None
            }
            Err(e) => {
                log::error!("❌ Failed to publish offer: {}", e);
                self.error = Some(format!("Não foi possível publicar: {}", e));
                None
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &PageContext) -> Option<Route> {
        if let Some(route) = self.update_from_async() {
            return Some(route);
        }

        ui.heading("Criar anúncio");
        ui.add_space(10.0);

        egui::Grid::new("create_offer_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                let draft = &mut self.draft;

                ui.label("Moeda enviada:");
                ui.add(egui::TextEdit::singleline(&mut draft.sender).hint_text("EUR"));
                ui.end_row();

                ui.label("Valor enviado:");
                ui.add(egui::TextEdit::singleline(&mut draft.source_amount).hint_text("100,00"));
                ui.end_row();

                ui.label("Moeda recebida:");
                ui.add(egui::TextEdit::singleline(&mut draft.recipient).hint_text("AOA"));
                ui.end_row();

                ui.label("Valor recebido:");
                ui.add(egui::TextEdit::singleline(&mut draft.target_amount).hint_text("105 000,00"));
                ui.end_row();

                ui.label("Taxa (opcional):");
                ui.add(egui::TextEdit::singleline(&mut draft.tax));
                ui.end_row();

                ui.label("Banco:");
                ui.text_edit_singleline(&mut draft.bank);
                ui.end_row();

                ui.label("Chave de pagamento:");
                ui.text_edit_singleline(&mut draft.payment_key);
                ui.end_row();
            });

        if !self.draft.source_amount.trim().is_empty() && !self.draft.amounts_are_valid() {
            ui.colored_label(egui::Color32::RED, "Os valores devem ser números positivos.");
        }
        if !self.draft.tax_is_valid() {
            ui.colored_label(egui::Color32::RED, "A taxa deve ser um número não negativo.");
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let can_publish = self.draft.is_complete() && !self.is_publishing();
            if ui.add_enabled(can_publish, egui::Button::new("Publicar")).clicked() {
                self.publish(ctx);
            }

            if self.is_publishing() {
                ui.spinner();
                ui.label("A publicar...");
            }
        });

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }

        None
    }
}
