use handlebars::Handlebars;
use std::sync::Arc;

pub type Hbs = Arc<Handlebars<'static>>;

pub fn build_handlebars() -> Hbs {
    let mut hb = Handlebars::new();

    // Layout + pages
    hb.register_template_file("layouts/base", "templates/layouts/base.hbs")
        .expect("template layouts/base");

    hb.register_template_file("pages/dashboard", "templates/pages/dashboard.hbs")
        .expect("template pages/dashboard");
    hb.register_template_file("pages/not_found", "templates/pages/not_found.hbs")
        .expect("template pages/not_found");

    // Partial endpoints
    hb.register_template_file("partials/history_rows", "templates/partials/history_rows.hbs")
        .expect("template partials/history_rows");
    hb.register_template_file("partials/alerts", "templates/partials/alerts.hbs")
        .expect("template partials/alerts");
    hb.register_template_file("partials/balance", "templates/partials/balance.hbs")
        .expect("template partials/balance");
    hb.register_template_file("partials/price", "templates/partials/price.hbs")
        .expect("template partials/price");

    // the dashboard page embeds the first batch of rows
    let rows = std::fs::read_to_string("templates/partials/history_rows.hbs")
        .expect("partials/history_rows.hbs");
    hb.register_partial("history_rows", rows).expect("register history_rows partial");

    Arc::new(hb)
}
