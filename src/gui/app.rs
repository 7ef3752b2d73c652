use crate::adapters::ResultLayout;
use crate::controller::SearchController;
use crate::loading::parse_hex_color;
use crate::presenter::{ResultRow, ResultsView};
use egui::{Color32, RichText};
use log::warn;

pub const WINDOW_TITLE: &str = "Recipe App";

const BACKGROUND: Color32 = Color32::from_rgb(0xFD, 0xF7, 0xE4);
const ACCENT: Color32 = Color32::from_rgb(0xEA, 0x86, 0xB6);
const INGREDIENTS_BACKGROUND: Color32 = Color32::from_rgb(0xFF, 0xDA, 0xDA);
const DEFAULT_LOADING_COLORS: [Color32; 2] = [
    Color32::from_rgb(0xF1, 0x1A, 0x7B),
    Color32::from_rgb(0x3E, 0x00, 0x1F),
];

pub struct RecipeApp {
    controller: SearchController,
    /// One texture per row of the current view
    textures: Vec<egui::TextureHandle>,
    loading_colors: [Color32; 2],
}

impl RecipeApp {
    pub fn new(controller: SearchController, colors: &[String]) -> Self {
        Self {
            controller,
            textures: Vec::new(),
            loading_colors: loading_colors(colors),
        }
    }

    fn upload_textures(&mut self, ctx: &egui::Context) {
        self.textures = match self.controller.state().view() {
            Some(view) => view
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let thumbnail = &row.thumbnail;
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [thumbnail.width() as usize, thumbnail.height() as usize],
                        thumbnail.rgba(),
                    );
                    ctx.load_texture(format!("recipe-{i}"), image, egui::TextureOptions::default())
                })
                .collect(),
            None => Vec::new(),
        };
    }

    fn search_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Search Recipe")
                    .size(14.0)
                    .background_color(ACCENT),
            );
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.controller.state_mut().query)
                    .desired_width(360.0),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui.add(egui::Button::new("Search").fill(ACCENT)).clicked();
            if clicked || entered {
                self.controller.submit();
            }
        });
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        let state = self.controller.state();
        let text = RichText::new(state.status()).italics().size(16.0);
        match state.blink_phase() {
            Some(alternate) => {
                ui.label(text.color(self.loading_colors[usize::from(alternate)]));
                ui.add(
                    egui::ProgressBar::new(0.0)
                        .animate(true)
                        .desired_width(300.0),
                );
            }
            None => {
                ui.label(text);
            }
        }
    }

    fn results(&self, ui: &mut egui::Ui) {
        let Some(view) = self.controller.state().view() else {
            return;
        };

        match view.layout {
            ResultLayout::RecipeList => self.recipe_list(ui, view),
            ResultLayout::SingleRecipe => {
                for (row, texture) in view.rows.iter().zip(&self.textures) {
                    single_recipe(ui, row, texture);
                }
            }
        }
    }

    fn recipe_list(&self, ui: &mut egui::Ui, view: &ResultsView) {
        // The scroll extent follows the grid's size on every frame
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("results")
                    .num_columns(3)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        for (row, texture) in view.rows.iter().zip(&self.textures) {
                            ui.label(RichText::new(&row.title).strong().size(14.0));
                            ui.image(texture);
                            match &row.missing {
                                Some(missing) => ui.label(RichText::new(missing).strong()),
                                None => ui.label(""),
                            };
                            ui.end_row();
                        }
                    });
            });
    }
}

fn single_recipe(ui: &mut egui::Ui, row: &ResultRow, texture: &egui::TextureHandle) {
    ui.vertical_centered(|ui| {
        ui.image(texture);

        let mut ingredients = row.ingredients.as_deref().unwrap_or_default();
        ui.add(
            egui::TextEdit::multiline(&mut ingredients)
                .desired_rows(15)
                .desired_width(450.0)
                .background_color(INGREDIENTS_BACKGROUND),
        );

        let button = egui::Button::new("recipe link").fill(ACCENT);
        if ui.add_enabled(row.link.is_some(), button).clicked() {
            if let Some(url) = &row.link {
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
            }
        }
    });
}

fn loading_colors(colors: &[String]) -> [Color32; 2] {
    let mut parsed = DEFAULT_LOADING_COLORS;
    for (slot, hex) in parsed.iter_mut().zip(colors) {
        match parse_hex_color(hex) {
            Some([r, g, b]) => *slot = Color32::from_rgb(r, g, b),
            None => warn!("Ignoring invalid loading color {:?}", hex),
        }
    }
    parsed
}

impl eframe::App for RecipeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.poll() {
            self.upload_textures(ctx);
        }

        let frame = egui::Frame::default().fill(BACKGROUND).inner_margin(10.0);
        egui::TopBottomPanel::top("search")
            .frame(frame)
            .show(ctx, |ui| {
                self.search_bar(ui);
                self.status_line(ui);
            });
        egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| self.results(ui));
    }
}
