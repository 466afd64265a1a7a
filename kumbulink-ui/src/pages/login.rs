use eframe::egui;
use kumbulink_core::routes::Route;

use super::PageContext;

/// Landing page for visitors without a session.
pub struct LoginPage;

impl LoginPage {
    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &PageContext) -> Option<Route> {
        let mut next = None;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(egui::RichText::new(&ctx.config.app.name).size(32.0).strong());
            ui.add_space(16.0);

            if ctx.session.is_authenticated() {
                ui.label("Sessão ativa.");
                if ui.button("Ver anúncios").clicked() {
                    next = Some(Route::Offers);
                }
            } else {
                ui.label("Para ver e publicar anúncios precisa de uma sessão emitida pelo Kumbulink.");
                ui.add_space(24.0);
                ui.label("Ainda não tem conta?");
                if ui.button("Criar conta").clicked() {
                    next = Some(Route::Register);
                }
            }
        });

        next
    }
}
