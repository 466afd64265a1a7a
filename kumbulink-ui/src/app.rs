use std::time::Duration;

use eframe::egui;
use kumbulink_core::pointer::{Point, PointerEvents};
use kumbulink_core::routes::{self, Route, Session};
use kumbulink_core::{Config, OffersClient};

use crate::pages::{Page, PageContext};
use crate::wasm_utils;

const MENU: [(&str, Route); 4] = [
    ("🏠 Início", Route::Offers),
    ("➕ Anunciar", Route::CreateOffer),
    ("📝 Criar conta", Route::Register),
    ("🔑 Entrar", Route::Login),
];

/// Application root: owns the session, the API client and the mounted page.
pub struct KumbulinkApp {
    config: Config,
    session: Session,
    client: OffersClient,
    pointer_events: PointerEvents,
    route: Route,
    current_path: String,
    page: Page,
    menu_open: bool,
}

impl KumbulinkApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        wasm_utils::set_panic_hook();
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        log::info!("🚀 Starting Kumbulink");

        let config = Config::load().unwrap_or_else(|e| {
            log::error!("❌ Invalid configuration, using defaults: {:#}", e);
            Config::default()
        });

        let session =
            Session::from_token(wasm_utils::load_session_token(&config.app.token_storage_key));
        log::info!("Session authenticated: {}", session.is_authenticated());

        let client =
            OffersClient::new(&config.api).with_token(session.token().map(str::to_string));

        let initial = wasm_utils::current_path()
            .map(|path| Route::parse(&path, &config.app.base_path))
            .unwrap_or(Route::Offers);

        let mut app = Self {
            config,
            session,
            client,
            pointer_events: PointerEvents::new(),
            route: Route::NotFound,
            current_path: String::new(),
            page: Page::NotFound,
            menu_open: false,
        };
        app.navigate(initial);
        app
    }

    /// Resolves `route` through the session guard and mounts its page. The
    /// previous page is dropped, which abandons its requests and listeners.
    fn navigate(&mut self, route: Route) {
        let resolved = routes::resolve(route, &self.session);
        let path = resolved.full_path(&self.config.app.base_path);

        // Redirects rewrite the address bar too, so the location always
        // matches the mounted page.
        if wasm_utils::current_path().as_deref() != Some(path.as_str()) {
            wasm_utils::push_path(&path);
        }
        self.current_path = path;

        log::info!("Navigating to {:?}", resolved);
        self.route = resolved;
        let page = Page::mount(resolved, &self.context(), &self.pointer_events);
        self.page = page;
        self.menu_open = false;
    }

    fn context(&self) -> PageContext<'_> {
        PageContext {
            client: &self.client,
            session: &self.session,
            config: &self.config,
        }
    }

    /// Follows browser back/forward: the address bar changed under us.
    fn sync_with_location(&mut self) {
        let Some(path) = wasm_utils::current_path() else {
            return;
        };
        if path != self.current_path {
            let route = Route::parse(&path, &self.config.app.base_path);
            self.navigate(route);
        }
    }

    fn pump_pointer_events(&self, ctx: &egui::Context) {
        let pressed = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });

        if let Some(pos) = pressed {
            self.pointer_events.pointer_down(Point::new(pos.x, pos.y));
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) -> Option<Route> {
        let mut next = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("☰").on_hover_text("Menu").clicked() {
                    self.menu_open = !self.menu_open;
                }
                let brand = egui::RichText::new(&self.config.app.name).heading().strong();
                if ui.link(brand).clicked() {
                    next = Some(Route::Offers);
                }
            });
        });

        if self.menu_open {
            egui::SidePanel::left("side_menu")
                .resizable(false)
                .default_width(180.0)
                .show(ctx, |ui| {
                    ui.add_space(8.0);
                    for (label, route) in MENU {
                        let selected = self.route == route;
                        if ui.selectable_label(selected, label).clicked() {
                            next = Some(route);
                        }
                    }
                });
        }

        next
    }
}

impl eframe::App for KumbulinkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_with_location();
        self.pump_pointer_events(ctx);

        let mut next = self.render_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let context = PageContext {
                client: &self.client,
                session: &self.session,
                config: &self.config,
            };
            if let Some(route) = self.page.show(ui, &context) {
                next = Some(route);
            }
        });

        if let Some(route) = next {
            self.navigate(route);
        }

        // Keep polling while a request is in flight.
        if self.page.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
