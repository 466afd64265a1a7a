use eframe::egui;
use kumbulink_core::offers::OfferDetail;
use kumbulink_core::routes::Route;

use super::PageContext;

pub struct OfferDetailPage {
    id: u64,
    detail: OfferDetail,
}

impl OfferDetailPage {
    pub fn mount(ctx: &PageContext, id: u64) -> Self {
        Self {
            id,
            detail: OfferDetail::mount(ctx.client, id),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.detail.is_loading()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        self.detail.update_from_async();
        let mut next = None;

        if ui.button("← Voltar").clicked() {
            next = Some(Route::Offers);
        }
        ui.add_space(8.0);

        match &self.detail {
            OfferDetail::Loading(_) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("A carregar anúncio...");
                });
            }
            OfferDetail::NotFound => {
                ui.heading("Anúncio não encontrado");
                ui.label(format!("O anúncio #{} não existe ou foi removido.", self.id));
            }
            OfferDetail::Loaded(offer) => {
                ui.heading(format!("{} → {}", offer.sender, offer.recipient));
                ui.add_space(8.0);

                egui::Grid::new("offer_detail_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Envia:");
                        ui.strong(format!("{} {}", offer.source_amount, offer.sender));
                        ui.end_row();

                        ui.label("Recebe:");
                        ui.strong(format!("{} {}", offer.target_amount, offer.recipient));
                        ui.end_row();

                        ui.label("Taxa:");
                        ui.label(offer.tax.as_deref().unwrap_or("-"));
                        ui.end_row();

                        ui.label("Banco:");
                        ui.label(&offer.bank);
                        ui.end_row();

                        ui.label("Chave de pagamento:");
                        ui.monospace(&offer.payment_key);
                        ui.end_row();

                        ui.label("Publicado:");
                        ui.label(&offer.date);
                        ui.end_row();
                    });
            }
        }

        next
    }
}
