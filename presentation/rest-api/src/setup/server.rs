use poem::{
    EndpointExt, IntoEndpoint, IntoResponse, Response, Route, Server as PoemServer,
    listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};

use crate::api::error::{IntoErrorResponse, RequestError};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

/// Mounts the API under `/api` plus the Swagger UI and the OpenAPI document.
pub fn build_routes(container: DependencyContainer, public_url: &str) -> Route {
    let api_service = OpenApiService::new(
        (container.health_api, container.product_api),
        "Product Service API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", public_url));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    let api = api_service
        .into_endpoint()
        .catch_error(|err: ParseRequestPayloadError| async move {
            tracing::warn!(reason = %err, "rejected request body");
            reject(RequestError::MalformedBody)
        })
        .catch_error(|err: ContentTypeError| async move {
            tracing::warn!(reason = %err, "rejected request content type");
            reject(RequestError::UnsupportedContentType)
        });

    Route::new()
        .nest("/api", api)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
}

fn reject(error: RequestError) -> Response {
    error.into_error_response().into_response()
}

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = format!("http://{}", addr);
        let app = build_routes(container, &public_url)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at {}", public_url);
        tracing::info!("Swagger UI at {}/docs", public_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", public_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
