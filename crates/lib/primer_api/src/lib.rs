//! # primer_api
//!
//! HTTP API library for Primer.

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod services;
pub mod wrap;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use primer_core::items::ItemStore;

use crate::config::ApiConfig;
use crate::envelope::{Envelope, Reply};
use crate::handlers::{basics, chat, hello, items};
use crate::services::chat::SharedHistory;
use crate::services::items::SharedStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory item store.
    pub store: SharedStore,
    /// Chatbot conversation history.
    pub chat_history: SharedHistory,
    /// HTTP client for the Gemini proxy.
    pub http: reqwest::Client,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Fresh state: empty store, empty chat history.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(ItemStore::new())),
            chat_history: Arc::new(RwLock::new(Vec::new())),
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// Unmatched routes also answer with an envelope.
async fn not_found_handler() -> Reply {
    Reply::new(
        Envelope::fail("Not found", StatusCode::NOT_FOUND),
        StatusCode::NOT_FOUND,
    )
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let item_routes = Router::new()
        .route(
            "/api/items",
            get(items::list_items_handler).post(items::create_item_handler),
        )
        .route(
            "/api/items/{id}",
            get(items::get_item_handler)
                .put(items::update_item_handler)
                .delete(items::delete_item_handler),
        );

    let basics_routes = Router::new()
        .route("/api/basics/variables", get(basics::variables_handler))
        .route("/api/basics/operators", get(basics::operators_handler))
        .route("/api/basics/conditional", get(basics::conditional_handler))
        .route("/api/basics/loops", get(basics::loops_handler))
        .route("/api/basics/functions", get(basics::functions_handler))
        .route("/api/basics/lists", get(basics::lists_handler))
        .route("/api/basics/tuples", get(basics::tuples_handler))
        .route("/api/basics/dictionaries", get(basics::dictionaries_handler))
        .route("/api/basics/sets", get(basics::sets_handler));

    let ai_routes = Router::new()
        .route("/ai/chat", post(chat::chat_handler))
        .route("/ai/clear_chat", post(chat::clear_chat_handler))
        .route("/ai/list_models", get(chat::list_models_handler));

    Router::new()
        .route("/", get(hello::hello_world))
        .merge(item_routes)
        .merge(basics_routes)
        .merge(ai_routes)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
