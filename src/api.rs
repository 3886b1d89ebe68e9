use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::pager::PageRequest;
use crate::render;
use crate::table::{Navigator, WalletTable};

/// The single listing view, shared by every request
pub type SharedTable = Arc<Mutex<WalletTable>>;

#[derive(Deserialize)]
pub struct PageForm {
    pub page: String,
}

#[derive(Deserialize)]
pub struct SelectForm {
    #[serde(rename = "walletAddress", default)]
    pub wallet_address: String,
}

/// Captures the path of a row selection so it can become a redirect
#[derive(Default)]
struct RedirectNavigator {
    target: Option<String>,
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str) {
        self.target = Some(path.to_string());
    }
}

pub async fn serve(cfg: Config, table: SharedTable) -> eyre::Result<()> {
    let app = router(table);

    let addr = SocketAddr::new(cfg.bind_addr, cfg.port);
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

pub fn router(table: SharedTable) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(listing))
        .route("/sort", post(toggle_sort))
        .route("/page", post(change_page))
        .route("/select", post(select_row))
        .route("/wallet/", get(|| async { Html(render::render_wallet_details("")) }))
        .route("/wallet/:wallet_address", get(wallet_details))
        .route("/api/wallets", get(snapshot))
        .route("/health", get(|| async { "Wallet dashboard running" }))
        .layer(cors)
        .with_state(table)
}

// Handlers run to completion under the lock, and every mutation leaves
// the table consistent, so a poisoned lock is safe to reuse.
fn lock(table: &SharedTable) -> MutexGuard<'_, WalletTable> {
    table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

async fn listing(State(table): State<SharedTable>) -> Html<String> {
    Html(render::render_listing(&lock(&table)))
}

async fn toggle_sort(State(table): State<SharedTable>) -> Redirect {
    let applied = lock(&table).toggle_sort();
    info!("Sorted wallets by net profit ({:?})", applied);
    Redirect::to("/")
}

async fn change_page(State(table): State<SharedTable>, Form(form): Form<PageForm>) -> Response {
    match form.page.parse::<PageRequest>() {
        Ok(request) => {
            lock(&table).change_page(request);
            Redirect::to("/").into_response()
        }
        Err(e) => {
            warn!("Rejected page change: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

async fn select_row(State(table): State<SharedTable>, Form(form): Form<SelectForm>) -> Response {
    let mut nav = RedirectNavigator::default();
    lock(&table).select_row(&form.wallet_address, &mut nav);

    match nav.target {
        Some(path) => Redirect::to(&path).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn wallet_details(Path(wallet_address): Path<String>) -> Html<String> {
    Html(render::render_wallet_details(&wallet_address))
}

async fn snapshot(State(table): State<SharedTable>) -> impl IntoResponse {
    Json(lock(&table).snapshot())
}
