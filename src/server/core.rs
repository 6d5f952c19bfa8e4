use log::info;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::api;
use crate::config::ServerConfig;

/// HTTP server owning the bound listener and shared configuration.
pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Binds the listener. The upload directory is not created here; the
    /// storage layer creates it lazily on the first store.
    pub async fn new(config: ServerConfig) -> io::Result<Self> {
        let socket = config.listen_socket();
        let listener = TcpListener::bind(&socket).await?;
        info!("Server bound to {}", socket);
        info!("Upload directory: {}", config.upload_dir);

        Ok(Self {
            listener,
            config: Arc::new(config),
        })
    }

    /// Serves requests until the process is stopped.
    pub async fn start(self) -> io::Result<()> {
        info!(
            "Starting file gateway on {} (body limit {} MB)",
            self.config.listen_socket(),
            self.config.max_upload_size_mb
        );

        let router = api::router(Arc::clone(&self.config));
        axum::serve(self.listener, router).await
    }
}
