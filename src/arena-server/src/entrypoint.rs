use tokio::sync::broadcast;
use tracing::{info, Level};

use crate::service::arena::ArenaService;

#[derive(Clone)]
pub struct ArenaConfig {
    pub rest_address: String,
}

pub async fn serve(
    config: ArenaConfig,
    shutdown_receiver: broadcast::Receiver<()>,
    ready_signal: Option<tokio::sync::oneshot::Sender<()>>,
) {
    ArenaService::new()
        .run(config, shutdown_receiver, ready_signal)
        .await
}

pub struct ArenaServer {
    pub config: ArenaConfig,
    shutdown_sender: broadcast::Sender<()>,
}

impl ArenaServer {
    pub async fn new(config: ArenaConfig) -> Self {
        // Init logging, ignore error if already set
        let _ = tracing_subscriber::fmt()
            .with_line_number(true)
            .with_file(true)
            .with_max_level(Level::DEBUG)
            .try_init();

        // Create server
        let (shutdown_sender, shutdown_receiver) = tokio::sync::broadcast::channel(1);
        let (ready_sender, ready_receiver) = tokio::sync::oneshot::channel::<()>();

        let moved_cfg = config.clone();
        tokio::spawn(serve(moved_cfg, shutdown_receiver, Some(ready_sender)));

        // Wait for server to be ready
        ready_receiver.await.expect("Server failed to start");
        info!("Arena ready on {}", config.rest_address);

        // Return server
        ArenaServer {
            shutdown_sender,
            config,
        }
    }

    pub async fn shutdown(&self) {
        self.shutdown_sender.send(()).expect("Failed to shutdown");
    }
}
