use serde_json::json;

use crate::{models::HistoryRow, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Danger,
}

impl AlertLevel {
    fn css_class(self) -> &'static str {
        match self {
            AlertLevel::Success => "text-success",
            AlertLevel::Danger => "text-danger",
        }
    }
}

pub fn render_full(state: &AppState, title: &str, body_html: String) -> Result<String, String> {
    let ctx = json!({
        "title": title,
        "body": body_html,
        "symbol": state.settings.symbol,
    });

    state
        .hbs
        .render("layouts/base", &ctx)
        .map_err(|e| e.to_string())
}

pub fn render_history_rows(state: &AppState, rows: &[HistoryRow]) -> Result<String, String> {
    state
        .hbs
        .render("partials/history_rows", &json!({ "rows": rows }))
        .map_err(|e| e.to_string())
}

pub fn render_alerts(state: &AppState, level: AlertLevel, messages: &[String]) -> Result<String, String> {
    state
        .hbs
        .render(
            "partials/alerts",
            &json!({ "class": level.css_class(), "messages": messages }),
        )
        .map_err(|e| e.to_string())
}

/// How an out-of-band row batch lands in `#ordens-body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySwap {
    /// The rows are the whole fresh history.
    Replace,
    /// The rows are local additions shown above what the page already has.
    Prepend,
}

impl HistorySwap {
    fn oob_attr(self) -> &'static str {
        match self {
            HistorySwap::Replace => "true",
            HistorySwap::Prepend => "afterbegin",
        }
    }
}

/// Rows wrapped for an out-of-band swap of `#ordens-body`.
pub fn render_history_oob(state: &AppState, rows: &[HistoryRow], swap: HistorySwap) -> Result<String, String> {
    let inner = render_history_rows(state, rows)?;
    Ok(format!(
        r#"<template><tbody id="ordens-body" hx-swap-oob="{}">{inner}</tbody></template>"#,
        swap.oob_attr()
    ))
}
