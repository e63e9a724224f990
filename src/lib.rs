//! Library entrypoint for the dashboard.
//!
//! Integration tests under `tests/` import the app state, routers,
//! controllers and the dashboard core from here.

pub mod config;
pub mod error;
pub mod models;
pub mod prompt;

pub mod services;

pub mod dashboard;

#[path = "views/render.rs"]
pub mod render;
#[path = "views/templates.rs"]
pub mod templates;

pub mod controllers;
pub mod routes;

use dashboard::DashboardController;
use services::{backend::HttpBackend, market_data::MarketDataClient};

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub backend: HttpBackend,
    pub market: MarketDataClient,
}

impl AppState {
    pub fn new(settings: config::Settings, hbs: templates::Hbs) -> Self {
        let backend = HttpBackend::new(settings.backend_url.clone());
        let market = MarketDataClient::new(settings.market_data_url.clone());

        Self {
            hbs,
            settings,
            backend,
            market,
        }
    }

    /// A controller scoped to one request. History is fetched fresh by
    /// whoever needs it, so nothing is shared between visitors.
    pub fn dashboard(&self) -> DashboardController<HttpBackend> {
        DashboardController::new(self.backend.clone(), self.settings.symbol.clone())
    }
}
