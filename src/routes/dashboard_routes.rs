use axum::{Router, routing::{get, post}};

use crate::{AppState, controllers::dashboard_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(dashboard_controller::get_dashboard_page))
        .route("/ordens", get(dashboard_controller::get_history_rows))
        .route("/ordens/:kind", post(dashboard_controller::post_order))
}
