// Local stand-ins for the workflow service frontend.
//
// - `spawn_workflow_service` runs a tonic health server on an ephemeral port.
//   `Some(status)` registers the workflow service with that status, `None`
//   leaves it unregistered.
// - `spawn_silent_listener` accepts TCP connections and never answers.
#![allow(dead_code)]

use std::net::SocketAddr;
use temporal_client::adapters::grpc::grpc_dialer::WORKFLOW_SERVICE;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
pub use tonic_health::ServingStatus;

pub async fn spawn_workflow_service(status: Option<ServingStatus>) -> SocketAddr {
    let (mut reporter, health_service) = tonic_health::server::health_reporter();
    if let Some(status) = status {
        reporter.set_service_status(WORKFLOW_SERVICE, status).await;
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _reporter = reporter;
        Server::builder()
            .add_service(health_service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
    });
    address
}

pub async fn spawn_silent_listener() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    address
}
