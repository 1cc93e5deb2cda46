//! In-process server harness for end-to-end testing
//!
//! [`TestServer`] binds the real router to an ephemeral loopback port and
//! shuts it down gracefully when dropped or stopped.

use anyhow::{Context, Result};
use pipescan_lib::server::{ServerConfig, serve_on};
use reqwest::Client;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running pipescan server bound to 127.0.0.1 on a free port
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<(), pipescan_lib::ServerError>>>,
}

impl TestServer {
    /// Start a server with default settings
    pub async fn start() -> Result<Self> {
        Self::start_with(ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))).await
    }

    /// Start a server with a custom configuration (its port is ignored)
    pub async fn start_with(config: ServerConfig) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind test listener")?;
        let addr = listener.local_addr()?;

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            serve_on(listener, &config, async {
                let _ = rx.await;
            })
            .await
        });

        Ok(Self {
            addr,
            client: Client::new(),
            shutdown: Some(tx),
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Absolute URL for a route on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to `/pipelines/parse`, returning status and JSON body
    pub async fn parse(&self, payload: &Value) -> Result<(u16, Value)> {
        let response = self
            .client
            .post(self.url("/pipelines/parse"))
            .json(payload)
            .send()
            .await
            .context("Request to /pipelines/parse failed")?;

        let status = response.status().as_u16();
        let body = response.json::<Value>().await?;
        Ok((status, body))
    }

    /// Signal shutdown and wait for the server task to finish
    pub async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await??;
        }
        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
