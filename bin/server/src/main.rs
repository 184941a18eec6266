mod collaborators;
mod config;
mod routes;
mod state;

use collaborators::{ArxivClient, OpenAiBackend, PdfTextExtractor, TimedTextClient, TwilioTransport};
use config::ServerConfig;
use pony_express_assistant::{Assistant, FileNoteStore, ModelParams};
use pony_express_conversation::ConversationLog;
use pony_express_enrich::Enricher;
use pony_express_outbound::Dispatcher;
use pony_express_scheduler::ReminderScheduler;
use state::{AppState, DispatcherSink};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .expect("failed to build HTTP client");

    // Caption fetches optionally go through a forward proxy; everything
    // else uses the direct client.
    let transcript_http = match &config.proxy {
        Some(proxy) => {
            tracing::info!(endpoint = %proxy.endpoint, "routing transcript fetches through proxy");
            reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .proxy(reqwest::Proxy::all(proxy.url()).expect("invalid proxy URL"))
                .build()
                .expect("failed to build proxied HTTP client")
        }
        None => http.clone(),
    };

    let enricher = Enricher::new(
        Arc::new(TimedTextClient::new(transcript_http)),
        Arc::new(ArxivClient::new(http.clone())),
        Arc::new(PdfTextExtractor),
    );

    let transport = Arc::new(TwilioTransport::new(http.clone(), &config.twilio));
    let dispatcher = Dispatcher::new(transport);

    let reminders = ReminderScheduler::new(Arc::new(DispatcherSink::new(dispatcher.clone())));

    let assistant = Assistant::new(
        ConversationLog::new(),
        enricher,
        Arc::new(OpenAiBackend::new(http, &config.openai)),
        Arc::new(FileNoteStore::new(&config.note_path)),
        reminders,
    )
    .with_params(ModelParams {
        model: config.openai.model.clone(),
        ..ModelParams::default()
    });

    let app = routes::router(AppState {
        assistant: Arc::new(assistant),
        dispatcher,
    })
    .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind listener");
    tracing::info!(addr = %config.listen_addr, "listening");

    axum::serve(listener, app)
        .await
        .expect("server terminated");
}
