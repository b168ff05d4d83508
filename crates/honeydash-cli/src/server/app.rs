//! Axum application setup.

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Any front end may fetch chart specs
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/options", get(handlers::get_options))
        .route("/summary", get(handlers::get_summary))
        .route("/charts/choropleth", get(handlers::get_choropleth))
        .route("/charts/line", get(handlers::get_line_chart))
        .route("/charts/bubble", get(handlers::get_bubble_chart));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

/// Start the web server and run until Ctrl+C.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use honeydash::{
        ColonyDataset, ColonyRecord, Dashboard, DashboardConfig, ProductionDataset,
        ProductionRecord, Stressor,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        let colonies = ColonyDataset::from_records(vec![
            ColonyRecord::new("California", "CA", "2015Q1".parse().unwrap())
                .with(Stressor::VarroaMites, 19.1),
            ColonyRecord::new("California", "CA", "2015Q2".parse().unwrap())
                .with(Stressor::VarroaMites, 31.2),
        ])
        .unwrap();
        let production = ProductionDataset::from_records(vec![
            ProductionRecord::new("California", 2000, 450, 59.5, 83.0),
            ProductionRecord::new("Florida", 2000, 230, 64.0, 98.0),
        ])
        .unwrap();
        let dashboard = Dashboard::new(DashboardConfig::default(), colonies, production).unwrap();
        create_router(AppState::new(dashboard))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_options() {
        let (status, body) = get("/api/options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period_slider"]["1"], "2015Q1");
        assert_eq!(body["slider_size"], 700);
        assert_eq!(body["defaults"]["state"], "California");
    }

    #[tokio::test]
    async fn test_choropleth_by_period_and_slider() {
        let (status, body) = get("/api/charts/choropleth?period=2015Q2&stressor=varroa_mites").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "choropleth");
        assert_eq!(body["regions"][0]["z"], 31.2);

        let (status, body) = get("/api/charts/choropleth?slider=1&stressor=varroa_mites").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "2015Q1");
    }

    #[tokio::test]
    async fn test_invalid_parameter_is_bad_request() {
        let (status, body) = get("/api/charts/choropleth?period=2020Q1&stressor=varroa_mites").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_parameter");

        let (status, body) = get("/api/charts/line").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_line_and_bubble() {
        let (status, body) = get("/api/charts/line?state=California").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["series"].as_array().unwrap().len(), 5);

        let (status, body) = get("/api/charts/bubble?year=2000&top_n=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bubbles"].as_array().unwrap().len(), 1);
        assert_eq!(body["bubbles"][0]["state"], "California");

        let (status, _) = get("/api/charts/bubble?year=1999").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_bubble_top_n_defaults_to_config() {
        let (status, body) = get("/api/charts/bubble?year=2000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["top_n"], DashboardConfig::default().bubble_top_n);
        assert_eq!(body["bubbles"].as_array().unwrap().len(), 2);

        let (status, body) = get("/api/charts/bubble?year=2000&top_n=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_parameter");
    }

    #[tokio::test]
    async fn test_state_with_spaces_is_decoded() {
        let (status, body) = get("/api/charts/line?state=North%20Dakota").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], "North Dakota");
    }
}
