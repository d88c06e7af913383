use crate::{
    app_state::AppState,
    configuration::{DatabaseSettings, Settings},
    generative_client::GenerativeClient,
    metadata_client::MetadataClient,
    request_id::{request_span, RequestUuid},
    routes::{dashboard, health_check, history, home, login, logout, newsletters, signup},
    session::middleware::AuthorizedSessionLayer,
    transcript_client::TranscriptClient,
};
use axum::Router;
use axum_messages::MessagesManagerLayer;
use secrecy::ExposeSecret;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tower_sessions::{cookie::Key, MemoryStore, SessionManagerLayer};

const PROTECTED_PATHS: &[&str] = &["/dashboard", "/history", "/newsletters"];
const AUTH_PATHS: &[&str] = &["/login", "/signup"];

pub struct Application {
    local_addr: SocketAddr,
    listener: TcpListener,
    app: Router,
}

impl Application {
    pub async fn build(config: Settings) -> Application {
        let listener = TcpListener::bind((config.application.host.as_str(), config.application.port))
            .await
            .expect("Failed to bind a listener");
        let local_addr = listener
            .local_addr()
            .expect("Failed to read the bound address");

        let db_pool = get_connection_pool(&config.database);
        let metadata_client = MetadataClient::new(
            config.youtube.base_url.clone(),
            config.youtube.api_key.clone(),
            config.youtube.timeout(),
        );
        let transcript_client = TranscriptClient::new(
            config.transcript.base_url.clone(),
            config.transcript.timeout(),
        );
        let generative_client = GenerativeClient::new(
            config.generative.base_url.clone(),
            config.generative.api_key.clone(),
            config.generative.model.clone(),
            config.generative.timeout(),
        );

        let app_state = AppState {
            db_pool,
            metadata_client,
            transcript_client,
            generative_client,
        };

        let key = Key::from(config.application.hmac_secret.expose_secret().as_bytes());
        let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_private(key);

        let app = Router::new()
            .merge(home::router())
            .merge(health_check::router())
            .merge(login::router())
            .merge(signup::router())
            .merge(logout::router())
            .merge(dashboard::router())
            .merge(history::router())
            .merge(newsletters::router())
            .layer(AuthorizedSessionLayer::new(PROTECTED_PATHS, AUTH_PATHS))
            .layer(MessagesManagerLayer)
            .layer(session_layer)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(RequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(request_span))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
            .with_state(app_state);

        Self {
            local_addr,
            listener,
            app,
        }
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}", self.local_addr);
        axum::serve(self.listener, self.app).await
    }
}

pub fn get_connection_pool(config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(config.with_db())
}
