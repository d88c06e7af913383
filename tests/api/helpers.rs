use once_cell::sync::Lazy;
use reqwest::{redirect::Policy, Client, Response};
use std::net::SocketAddr;
use tube2letter::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let default_env_filter = "info";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

static FAILED_TO_EXECUTE_REQUEST: &str = "Failed to execute request";

pub struct TestApp {
    pub address: SocketAddr,
    pub metadata_server: MockServer,
    pub transcript_server: MockServer,
    pub generative_server: MockServer,
    client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Lazy::force(&TRACING);

        let mut config = get_configuration().expect("Failed to read configuration");
        config.application.port = 0;

        let metadata_server = MockServer::start().await;
        let transcript_server = MockServer::start().await;
        let generative_server = MockServer::start().await;
        config.youtube.base_url = metadata_server.uri();
        config.transcript.base_url = transcript_server.uri();
        config.generative.base_url = generative_server.uri();

        let app = Application::build(config).await;
        let address = app.local_addr();

        tokio::spawn(app.run_until_stopped());

        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to build test client");

        Self {
            address,
            metadata_server,
            transcript_server,
            generative_server,
            client,
        }
    }

    pub async fn get_health_check(&self) -> Response {
        self.get_page("/health_check").await
    }

    pub async fn get_page(&self, endpoint: &str) -> Response {
        self.client
            .get(self.url(endpoint))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_form(&self, endpoint: &str, body: String) -> Response {
        self.client
            .post(self.url(endpoint))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("http://{}{endpoint}", self.address)
    }
}

pub fn assert_redirects_to(response: &Response, location: &str) {
    assert_eq!(response.status(), 303);
    assert_eq!(
        response
            .headers()
            .get("Location")
            .expect("Missing Location header"),
        location
    );
}
