use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use trigger_common::{error::Error, submitter::PipelineJobSubmitter};
use trigger_function::SubmitHandler;

/// HTTP front for the submit handler.
/// ---
/// Accepts Pub/Sub push deliveries on `POST /` and reports the
/// handler's (message, status) pair back as the HTTP response.
pub struct TriggerServer<S> {
    handler: Arc<SubmitHandler<S>>,
    listen_addr: SocketAddr,
}

impl<S: PipelineJobSubmitter> TriggerServer<S> {
    pub fn new(handler: SubmitHandler<S>, listen_addr: String) -> Result<Self, Error> {
        let listen_addr: SocketAddr = listen_addr.parse().map_err(|e| {
            Error::Config(format!(
                "Failed to parse listen address for trigger server: {}",
                e
            ))
        })?;

        Ok(Self {
            handler: Arc::new(handler),
            listen_addr,
        })
    }

    pub async fn serve(&self) -> Result<JoinHandle<()>, Error> {
        let handler = Arc::clone(&self.handler);
        let listen_addr = self.listen_addr;

        let handle = tokio::spawn(async move {
            let app = Router::new()
                .route("/", post(Self::push_handler))
                .route("/healthz", get(Self::healthz))
                .layer(TraceLayer::new_for_http())
                .with_state(handler);

            let listener = match TcpListener::bind(listen_addr).await {
                Ok(listener) => listener,
                Err(e) => {
                    error!("Failed to bind trigger listener: {}", e);
                    return;
                }
            };

            info!("Trigger push endpoint available at http://{}", listen_addr);

            if let Err(e) = axum::serve(listener, app.into_make_service()).await {
                error!("Trigger server encountered an error: {}", e);
            } else {
                info!("Trigger server stopped gracefully.");
            }
        });

        Ok(handle)
    }

    async fn push_handler(
        State(handler): State<Arc<SubmitHandler<S>>>,
        body: Bytes,
    ) -> impl IntoResponse {
        let (message, status_code) = handler.handle(&body).await.into_parts();

        let status =
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, message)
    }

    async fn healthz() -> impl IntoResponse {
        (StatusCode::OK, "ok")
    }
}
