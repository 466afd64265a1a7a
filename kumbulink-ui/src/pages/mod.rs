use eframe::egui;
use kumbulink_core::pointer::PointerEvents;
use kumbulink_core::routes::{Route, Session};
use kumbulink_core::{Config, OffersClient};

pub mod create_offer;
pub mod login;
pub mod offer_detail;
pub mod offers;
pub mod register;

pub use create_offer::CreateOfferPage;
pub use login::LoginPage;
pub use offer_detail::OfferDetailPage;
pub use offers::OffersPage;
pub use register::RegisterPage;

/// What a page may read from the application root.
pub struct PageContext<'a> {
    pub client: &'a OffersClient,
    pub session: &'a Session,
    pub config: &'a Config,
}

/// The mounted page. Replacing it drops the old page, and with it any
/// in-flight request or pointer subscription it owns.
pub enum Page {
    Offers(OffersPage),
    OfferDetail(OfferDetailPage),
    CreateOffer(CreateOfferPage),
    Login(LoginPage),
    Register(RegisterPage),
    NotFound,
}

impl Page {
    pub fn mount(route: Route, ctx: &PageContext, events: &PointerEvents) -> Self {
        match route {
            Route::Offers => Page::Offers(OffersPage::mount(ctx)),
            Route::OfferDetail(id) => Page::OfferDetail(OfferDetailPage::mount(ctx, id)),
            Route::CreateOffer => Page::CreateOffer(CreateOfferPage::new()),
            Route::Login => Page::Login(LoginPage),
            Route::Register => Page::Register(RegisterPage::mount(events)),
            Route::NotFound => Page::NotFound,
        }
    }

    /// Renders the page; returns a route when the user navigated away.
    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &PageContext) -> Option<Route> {
        match self {
            Page::Offers(page) => page.show(ui),
            Page::OfferDetail(page) => page.show(ui),
            Page::CreateOffer(page) => page.show(ui, ctx),
            Page::Login(page) => page.show(ui, ctx),
            Page::Register(page) => page.show(ui),
            Page::NotFound => not_found(ui),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Page::Offers(page) => page.is_loading(),
            Page::OfferDetail(page) => page.is_loading(),
            Page::CreateOffer(page) => page.is_publishing(),
            _ => false,
        }
    }
}

fn not_found(ui: &mut egui::Ui) -> Option<Route> {
    let mut next = None;
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("Página não encontrada");
        ui.add_space(12.0);
        if ui.button("Voltar ao início").clicked() {
            next = Some(Route::Offers);
        }
    });
    next
}
