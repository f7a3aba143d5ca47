//! Actix route handlers and the small helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use log::error;
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Maps a flash message level to the alert style used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// Builds the template context shared by every page: pending flash alerts.
pub fn base_context(flash_messages: &IncomingFlashMessages) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context
}

/// Renders a Tera template into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// See-other redirect used after form posts.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}
