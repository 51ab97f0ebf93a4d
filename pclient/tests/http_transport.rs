use std::time::Duration;

use pclient::{
    ClientConfig, ClientErrorKind, PatientQuery, ProntClient, ProntHttpTransport,
};
use tokio::net::TcpListener;

async fn silent_backend() -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let address = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    (format!("http://{address}/pront/api"), handle)
}

#[tokio::test]
async fn unanswered_request_surfaces_as_timeout() {
    let (base_url, server) = silent_backend().await;
    let config = ClientConfig::new(base_url.clone(), "test-key")
        .expect("config")
        .with_request_timeout(Duration::from_millis(200));
    let transport = std::sync::Arc::new(
        ProntHttpTransport::from_base_url(base_url).expect("transport"),
    );
    let client = ProntClient::new(config, transport);

    let error = client
        .buscar_paciente(&PatientQuery::by_numero(42))
        .await
        .expect_err("silent backend should time out");

    assert_eq!(error.kind, ClientErrorKind::Timeout);
    assert!(error.message.contains("timed out"));
    server.abort();
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let address = listener.local_addr().expect("local addr");
    drop(listener);

    let client = ProntClient::from_config(
        ClientConfig::new(format!("http://{address}/pront/api"), "test-key").expect("config"),
    )
    .expect("client");

    let error = client
        .health_check()
        .await
        .expect_err("nothing listens on the port");
    assert!(error.is_transport());
}
