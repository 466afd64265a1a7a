use eframe::egui;
use egui::load::TexturePoll;
use kumbulink_core::countries::{Country, CountryId};
use kumbulink_core::pointer::{Point, Region};
use kumbulink_core::registration::CountrySelector;

const FLAG_SIZE: egui::Vec2 = egui::vec2(24.0, 16.0);
const DROPDOWN_HEIGHT: f32 = 240.0;

fn flag_url(country: &Country) -> String {
    format!("https://flagcdn.com/w40/{}.png", country.iso_code.to_lowercase())
}

fn region_of(rect: egui::Rect) -> Region {
    Region::new(
        Point::new(rect.min.x, rect.min.y),
        Point::new(rect.max.x, rect.max.y),
    )
}

/// Flag image fetched in the background; a neutral tile stands in until the
/// texture is ready (or if it never loads).
pub fn flag_icon(ui: &mut egui::Ui, country: &Country) {
    let image = egui::Image::new(flag_url(country)).fit_to_exact_size(FLAG_SIZE);

    match image.load_for_size(ui.ctx(), FLAG_SIZE) {
        Ok(TexturePoll::Ready { .. }) => {
            ui.add(image);
        }
        _ => {
            let (rect, _) = ui.allocate_exact_size(FLAG_SIZE, egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 2.0, ui.visuals().widgets.noninteractive.bg_fill);
        }
    }
}

/// Country input plus its dropdown list.
///
/// Reports the input and dropdown rectangles to `selector` every frame so the
/// outside-press listener tests against what is actually on screen. Returns
/// the country picked this frame, if any.
pub fn country_selector(
    ui: &mut egui::Ui,
    selector: &mut CountrySelector,
    selected: Option<CountryId>,
) -> Option<CountryId> {
    let width = ui.available_width().min(360.0);

    // The flag is part of the input, so the whole row is the input region.
    let row = ui.horizontal(|ui| {
        ui.set_width(width);
        let label = match selected {
            Some(id) => {
                let country = id.country();
                flag_icon(ui, country);
                country.name
            }
            None => "Selecione o país",
        };
        ui.add(
            egui::Button::new(format!("{}  ⏷", label))
                .min_size(egui::vec2(ui.available_width(), 32.0)),
        )
    });
    let input_rect = row.response.rect;
    let response = row.inner;

    selector.set_input_region(region_of(input_rect));
    if response.clicked() {
        selector.click_input();
    }

    if !selector.is_open() {
        selector.set_dropdown_region(None);
        return None;
    }

    let mut chosen = None;
    let options = selector.options();
    let dropdown = egui::Area::new(ui.id().with("country_dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(input_rect.left_bottom() + egui::vec2(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(input_rect.width());
                egui::ScrollArea::vertical()
                    .max_height(DROPDOWN_HEIGHT)
                    .show(ui, |ui| {
                        for country in options {
                            ui.horizontal(|ui| {
                                flag_icon(ui, country);
                                let is_selected = selected == Some(country.id);
                                if ui.selectable_label(is_selected, country.name).clicked() {
                                    chosen = Some(country.id);
                                }
                            });
                        }
                    });
            });
        });

    selector.set_dropdown_region(Some(region_of(dropdown.response.rect)));
    chosen.map(|id| selector.select(id))
}
