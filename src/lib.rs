pub mod app_state;
pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod generation;
pub mod generative_client;
pub mod markdown;
pub mod metadata_client;
pub mod newsletter_store;
pub mod request_id;
pub mod routes;
pub mod session;
pub mod startup;
pub mod telemetry;
pub mod transcript_client;
pub mod utils;
