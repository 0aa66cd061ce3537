#![windows_subsystem = "windows"]
//! Quake Finder - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod continents;
mod query;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::APP_VERSION;
use continents::Continent;
use eframe::egui;
use tracing::info;
use types::QueryStatus;
use ui::components;
use utils::{format_depth, format_event_time, get_data_dir};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "quake-finder.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quake_finder=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Quake Finder starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(960.0, 720.0)))
        .with_min_inner_size([780.0, 560.0])
        .with_title("Quake Finder");

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Quake Finder",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Enter anywhere submits the form, like a plain search form
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.submit_query(ctx);
        }

        // Left sidebar - query form (must be added BEFORE CentralPanel)
        egui::SidePanel::left("query_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 16, right: 16, top: 0, bottom: 0 }),
            )
            .show(ctx, |ui| {
                let panel_max_rect = ui.max_rect();

                // Header, centered
                ui.add_space(21.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(egui_phosphor::regular::WAVEFORM)
                                .size(34.0)
                                .color(theme::ACCENT),
                        )
                        .selectable(false),
                    );
                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("QUAKE FINDER")
                                .size(11.0)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(11.0);

                self.render_form(ui, ctx);

                // Version at very bottom
                let version_color = egui::Color32::from_rgb(0x45, 0x45, 0x4c);
                ui.painter().text(
                    egui::pos2(panel_max_rect.center().x, panel_max_rect.bottom() - 18.0),
                    egui::Align2::CENTER_TOP,
                    format!("v{}", APP_VERSION),
                    egui::FontId::proportional(10.0),
                    version_color,
                );
            });

        // Central panel - status + result cards
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.render_results(ui);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// FORM & RESULT RENDERING
// ============================================================================

impl App {
    fn render_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        // CONTINENT section
        theme::section_frame().show(ui, |ui| {
            components::section_label(ui, "CONTINENT");
            ui.add_space(theme::SPACING_MD);

            let selected_label = Continent::from_id(&self.continent_id)
                .map(Continent::label)
                .unwrap_or("Select continent...");
            egui::ComboBox::from_id_salt("continent_select")
                .selected_text(selected_label)
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for continent in Continent::ALL {
                        ui.selectable_value(
                            &mut self.continent_id,
                            continent.id().to_string(),
                            continent.label(),
                        );
                    }
                });
            components::field_error(ui, &self.errors.continent);
        });

        ui.add_space(theme::SPACING_SM);

        // START DATE section
        theme::section_frame().show(ui, |ui| {
            components::section_label(ui, "START DATE");
            ui.add_space(theme::SPACING_MD);

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                theme::input_frame().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.start_date)
                            .hint_text("YYYY-MM-DD")
                            .frame(false)
                            .desired_width(ui.available_width() - 40.0),
                    );
                });
                // Calendar popup writes back into the text field
                let picker = ui.add(
                    egui_extras::DatePickerButton::new(&mut self.picker_date)
                        .id_salt("start_date_picker"),
                );
                if picker.changed() {
                    self.start_date = self.picker_date.format("%Y-%m-%d").to_string();
                }
            });
            components::field_error(ui, &self.errors.start_date);
        });

        ui.add_space(theme::SPACING_SM);

        // MIN MAGNITUDE section
        theme::section_frame().show(ui, |ui| {
            components::section_label(ui, "MIN MAGNITUDE");
            ui.add_space(theme::SPACING_MD);

            theme::input_frame().show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.min_magnitude)
                        .hint_text("0 - 10")
                        .frame(false)
                        .desired_width(ui.available_width()),
                );
            });
            components::field_error(ui, &self.errors.magnitude);
        });

        ui.add_space(theme::SPACING_SM);

        // LIMIT section
        theme::section_frame().show(ui, |ui| {
            components::section_label(ui, "RESULT LIMIT");
            ui.add_space(theme::SPACING_MD);

            theme::input_frame().show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.limit)
                        .hint_text("20")
                        .frame(false)
                        .desired_width(ui.available_width()),
                );
            });
        });

        ui.add_space(theme::SPACING_XL);

        // Search button (full width, centered text)
        let search_rect = ui.available_rect_before_wrap();
        let search_rect = egui::Rect::from_min_size(
            search_rect.min,
            egui::vec2(search_rect.width(), theme::BUTTON_HEIGHT_LARGE),
        );
        let response = ui.allocate_rect(search_rect, egui::Sense::click());

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        let (fill, draw_rect) = theme::button_visual(&response, theme::BTN_ACCENT, search_rect);
        ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        let search_text = format!(
            "{} Search Earthquakes",
            egui_phosphor::regular::MAGNIFYING_GLASS
        );
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            &search_text,
            egui::FontId::proportional(14.0),
            theme::BTN_ACCENT_TEXT,
        );
        if response.clicked() {
            self.submit_query(ctx);
        }
        response.on_hover_text("Enter");
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        // Snapshot shared state once per frame
        let (status, events) = {
            let s = self.fetch_state.lock().unwrap();
            (s.status.clone(), s.events.clone())
        };

        // Status line
        if let Some(message) = status.message() {
            let color = match status {
                QueryStatus::Failed | QueryStatus::InvalidContinent => theme::STATUS_ERROR,
                QueryStatus::Found(_) => theme::STATUS_SUCCESS,
                _ => theme::TEXT_MUTED,
            };
            ui.add(
                egui::Label::new(egui::RichText::new(message).color(color)).selectable(false),
            );
            ui.add_space(theme::SPACING_MD);
        }

        if events.is_empty() {
            if status == QueryStatus::Idle {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::GLOBE_HEMISPHERE_WEST)
                            .size(48.0)
                            .color(theme::TEXT_DIM),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Pick a continent and search the catalog")
                            .size(16.0)
                            .color(theme::TEXT_MUTED),
                    );
                });
            }
            return;
        }

        // One card per event, in the order the API returned them
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in &events {
                    theme::card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());

                        ui.horizontal(|ui| {
                            components::magnitude_badge(ui, event.magnitude);
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&event.place)
                                        .size(14.0)
                                        .color(theme::TEXT_PRIMARY),
                                )
                                .selectable(false),
                            );
                        });

                        ui.add_space(theme::SPACING_SM);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "{}  {}   {}  {}",
                                    egui_phosphor::regular::CLOCK,
                                    format_event_time(event.time_ms),
                                    egui_phosphor::regular::ARROWS_DOWN_UP,
                                    format_depth(event.depth_km),
                                ))
                                .size(12.0)
                                .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );

                        ui.add_space(theme::SPACING_SM);
                        let link = ui.link(
                            egui::RichText::new(format!(
                                "{} USGS Detail Page",
                                egui_phosphor::regular::ARROW_SQUARE_OUT
                            ))
                            .size(12.0)
                            .color(theme::ACCENT),
                        );
                        if link.clicked() {
                            let _ = open::that(&event.detail_url);
                        }
                    });
                    ui.add_space(theme::SPACING_MD);
                }
            });
    }
}
