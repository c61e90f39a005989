use anyhow::{Context, Result};
use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, RawQuery, State},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use super::views::{GridTemplate, IndexTemplate, MainTemplate, PageView, SettingsTemplate};
use super::{http_cache, log_requests, state::*, HxRequest, PageError, ServerConfig};
use crate::chords::{ChordGenerator, FlatMap, Settings};

fn render<T: Template>(template: &T) -> Result<Html<String>, PageError> {
    Ok(Html(template.render()?))
}

async fn index(
    State(state): State<ServerState>,
    Query(params): Query<FlatMap>,
) -> Result<Html<String>, PageError> {
    let settings = Settings::decode(&params);
    let view = PageView::new(&settings, state.generator.generate(&settings));
    render(&IndexTemplate {
        view: &view,
        build_hash: &state.hash,
    })
}

async fn main_fragment(
    hx: HxRequest,
    State(generator): State<GuardedChordGenerator>,
    RawQuery(query): RawQuery,
    Query(params): Query<FlatMap>,
) -> Response {
    if let Some(redirect) = hx.fallback(query.as_deref()) {
        return redirect;
    }
    let settings = Settings::decode(&params);
    let view = PageView::new(&settings, generator.generate(&settings));
    render(&MainTemplate { view: &view }).into_response()
}

async fn grid_fragment(
    hx: HxRequest,
    State(generator): State<GuardedChordGenerator>,
    RawQuery(query): RawQuery,
    Query(params): Query<FlatMap>,
) -> Response {
    if let Some(redirect) = hx.fallback(query.as_deref()) {
        return redirect;
    }
    let settings = Settings::decode(&params);
    let view = PageView::new(&settings, generator.generate(&settings));
    render(&GridTemplate { view: &view }).into_response()
}

async fn settings_fragment(
    hx: HxRequest,
    RawQuery(query): RawQuery,
    Query(params): Query<FlatMap>,
) -> Response {
    if let Some(redirect) = hx.fallback(query.as_deref()) {
        return redirect;
    }
    let settings = Settings::decode(&params);
    let view = PageView::new(&settings, Vec::new());
    render(&SettingsTemplate { view: &view }).into_response()
}

pub fn make_app(
    config: ServerConfig,
    generator: GuardedChordGenerator,
    hash: String,
) -> Result<Router> {
    let state = ServerState {
        config: config.clone(),
        generator,
        hash,
    };

    let page_routes: Router = Router::new()
        .route("/", get(index))
        .route("/main", get(main_fragment))
        .route("/grid", get(grid_fragment))
        .route("/settings", get(settings_fragment))
        .with_state(state.clone());

    let mut app = page_routes;
    match config.static_dir_path {
        Some(static_dir) => {
            info!("Serving static files from {:?}", static_dir);
            let static_routes: Router = Router::new()
                .nest_service("/static", ServeDir::new(static_dir))
                .layer(middleware::from_fn_with_state(
                    config.static_cache_age_sec,
                    http_cache,
                ));
            app = app.merge(static_routes);
        }
        None => warn!("No static directory configured, /static will not be served"),
    }

    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(
    config: ServerConfig,
    generator: ChordGenerator,
    hash: String,
) -> Result<()> {
    let address = format!("{}:{}", config.bind_address, config.port);
    let app = make_app(config, Arc::new(generator), hash)?;

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
