//! Full-stack test: the client SDK talks over real TCP to the HTTP server,
//! which fetches from a stubbed upstream and persists into SQLite.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cotacao_client::{RateClient, write_rate_file};
use cotacao_hex::{AwesomeApiProvider, RateService, ServiceTimeouts, inbound::HttpServer};
use cotacao_repo::build_store;
use cotacao_types::{Deadline, RateStore};

const USD_BRL: &str =
    r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dollar/Real","bid":"5.00"}}"#;

async fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn wait_until_listening(addr: SocketAddr) {
    for _ in 0..100 {
        if TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server did not start on {addr}");
}

#[tokio::test]
async fn test_client_saves_rate_served_by_server() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/last/USD-BRL"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USD_BRL))
        .mount(&upstream)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", tmp.path().join("database.db").display());
    let store = build_store(&db_url).await.unwrap();

    // A cold SQLite connect on a busy test host can exceed the 10ms default.
    let timeouts = ServiceTimeouts {
        persist: Duration::from_secs(1),
        ..ServiceTimeouts::default()
    };
    let provider = AwesomeApiProvider::new(format!("{}/json/last/USD-BRL", upstream.uri()));
    let server = HttpServer::new(RateService::with_timeouts(provider, store, timeouts));

    let addr = free_addr().await;
    tokio::spawn(async move { server.run(&addr.to_string()).await });
    wait_until_listening(addr).await;

    let client =
        RateClient::new(format!("http://{addr}/cotacao")).with_timeout(Duration::from_secs(2));
    let rate = client.fetch_rate().await.unwrap();
    assert_eq!(rate.bid, "5.00");

    let file = tmp.path().join("cotacao.txt");
    write_rate_file(&file, &rate).await.unwrap();
    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "Dólar:{code: codein: name: bid:5.00}"
    );

    // The server opened its own store; reopen the same file to inspect it.
    let rows = build_store(&db_url)
        .await
        .unwrap()
        .list(Deadline::after(Duration::from_secs(1)))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].bid, "5.00");
}
