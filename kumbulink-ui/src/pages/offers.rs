use eframe::egui;
use kumbulink_core::offers::{ExchangeOffer, OfferFeed, OfferView};
use kumbulink_core::routes::Route;

use super::PageContext;

const EMPTY_STATE: &str = "Nenhum anúncio disponível. Sê quem dá o pontapé de saída!";
const NO_MATCHES: &str = "Nenhum anúncio corresponde à pesquisa.";

pub struct OffersPage {
    feed: OfferFeed,
    query: String,
}

impl OffersPage {
    pub fn mount(ctx: &PageContext) -> Self {
        let mut feed = OfferFeed::new();
        feed.mount(ctx.client);
        Self {
            feed,
            query: String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.feed.is_loading()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        self.feed.update_from_async();
        let mut next = None;

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("🔍 Pesquisar moeda ou banco")
                    .desired_width(ui.available_width() - 90.0),
            );
            let active_filters = usize::from(!self.query.trim().is_empty());
            if ui.button(format!("Filtro ({})", active_filters)).clicked() {
                self.query.clear();
            }
        });
        ui.add_space(8.0);

        if self.feed.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("A carregar anúncios...");
            });
        } else {
            match self.feed.view(&self.query) {
                OfferView::Empty => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(32.0);
                        ui.label(EMPTY_STATE);
                    });
                }
                OfferView::NoMatches => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(32.0);
                        ui.label(NO_MATCHES);
                    });
                }
                OfferView::List(visible) => {
                    egui::ScrollArea::vertical()
                        .max_height(ui.available_height() - 48.0)
                        .show(ui, |ui| {
                            for offer in visible {
                                if offer_card(ui, offer) {
                                    next = Some(Route::OfferDetail(offer.id));
                                }
                                ui.add_space(6.0);
                            }
                        });
                }
            }
        }

        ui.add_space(8.0);
        ui.vertical_centered_justified(|ui| {
            if ui.add(egui::Button::new("Anunciar").min_size(egui::vec2(0.0, 36.0))).clicked() {
                next = Some(Route::CreateOffer);
            }
        });

        next
    }
}

/// Returns true when the card was clicked.
fn offer_card(ui: &mut egui::Ui, offer: &ExchangeOffer) -> bool {
    let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.strong(format!("{} {}", offer.source_amount, offer.sender));
            ui.label("→");
            ui.strong(format!("{} {}", offer.target_amount, offer.recipient));
        });
        ui.horizontal(|ui| {
            ui.label(format!("🏦 {}", offer.bank));
            if let Some(tax) = &offer.tax {
                ui.label(format!("Taxa: {}", tax));
            }
        });
        ui.small(&offer.date);
    });

    frame
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}
