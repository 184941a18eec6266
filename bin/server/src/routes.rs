//! HTTP surface of the gateway.
//!
//! Three routes: a greeting for health checks, a JSON send endpoint that
//! pushes a message through the outbound transport, and the WhatsApp
//! webhook that answers with TwiML.

use crate::state::AppState;
use axum::extract::{Form, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use pony_express_outbound::DeliveryReceipt;
use serde::{Deserialize, Serialize};

/// Builds the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/send", post(send_message))
        .route("/whatsapp", post(whatsapp_webhook))
        .with_state(state)
}

async fn greeting() -> &'static str {
    "Welcome to the SMS API!"
}

#[derive(Debug, Deserialize)]
struct SendRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct SendResponse {
    results: Vec<DeliveryReceipt>,
}

/// Sends a message to the configured recipient, chunked.
///
/// Always answers 200; per-chunk outcomes are in the receipt list.
async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendRequest>,
) -> Json<SendResponse> {
    let results = state.dispatcher.send(&request.message).await;
    Json(SendResponse { results })
}

#[derive(Debug, Deserialize)]
struct WhatsAppForm {
    #[serde(rename = "Body", default)]
    body: String,
    #[serde(rename = "From", default)]
    from: String,
}

/// Inbound WhatsApp webhook.
///
/// Runs the full assistant pipeline and answers with the reply wrapped
/// in TwiML, which the provider relays back to the sender.
async fn whatsapp_webhook(
    State(state): State<AppState>,
    Form(form): Form<WhatsAppForm>,
) -> Response {
    tracing::info!(from = %form.from, chars = form.body.chars().count(), "inbound message");

    let reply = state.assistant.handle_message(&form.body).await;

    (
        [(header::CONTENT_TYPE, "application/xml")],
        twiml_reply(&reply),
    )
        .into_response()
}

/// Wraps a reply body in a TwiML messaging response.
fn twiml_reply(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        xml_escape(body)
    )
}

fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
