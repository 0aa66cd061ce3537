//! App module - contains the main application state and logic

mod fetch;

use crate::query::FieldErrors;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use chrono::NaiveDate;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Form state (raw strings, validated on submit)
    pub(crate) continent_id: String,
    pub(crate) start_date: String,
    pub(crate) min_magnitude: String,
    pub(crate) limit: String,
    // Backing value for the date picker button
    pub(crate) picker_date: NaiveDate,
    // Field errors from the last submission
    pub(crate) errors: FieldErrors,
    // Fetch state
    pub(crate) fetch_state: Arc<Mutex<FetchState>>,
    pub(crate) cancel_token: Option<CancellationToken>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) client: reqwest::Client,
    // Window tracking
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            continent_id: String::new(),
            start_date: String::new(),
            min_magnitude: String::new(),
            limit: String::new(),
            picker_date: chrono::Local::now().date_naive(),
            errors: FieldErrors::default(),
            fetch_state: Arc::new(Mutex::new(FetchState::default())),
            cancel_token: None,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            client: reqwest::Client::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
