use std::time::Duration;

use futures_util::future::join_all;
use rstest::rstest;
use tokio::{
    io::{
        AsyncReadExt,
        AsyncWriteExt,
    },
    net::{
        TcpListener,
        TcpStream,
    },
    time::timeout,
};

use crate::{
    config::endpoint::HostEndpoint,
    tests::{
        exchange,
        options,
        primary_store,
        spawn_proxy,
        spawn_worker,
    },
};

const BOUND: Duration = Duration::from_secs(5);

/// Port that nothing listens on once the probe listener is dropped.
async fn dead_endpoint() -> HostEndpoint {
    let probe = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = probe.local_addr().unwrap().port();
    drop(probe);

    HostEndpoint::new("127.0.0.1", port)
}

#[rstest]
#[case("status")]
#[case("STATUS")]
#[case("dbstatus")]
#[case("Hello World")]
#[case("ünïcödé payload")]
#[tokio::test]
async fn test_proxy_is_transparent(#[case] payload: &str) {
    let slave = spawn_worker(primary_store(), options(None)).await;
    let proxy = spawn_proxy(slave.endpoint(), options(None)).await;

    let mut direct = TcpStream::connect(slave.address).await.unwrap();
    let mut relayed = TcpStream::connect(proxy.address).await.unwrap();

    assert_eq!(
        exchange(&mut relayed, payload).await,
        exchange(&mut direct, payload).await
    );

    proxy.stop().await;
    slave.stop().await;
}

#[tokio::test]
async fn test_unreachable_slave() {
    let proxy = spawn_proxy(dead_endpoint().await, options(None)).await;
    let mut master = TcpStream::connect(proxy.address).await.unwrap();

    let mut notice = String::new();
    timeout(BOUND, master.read_to_string(&mut notice))
        .await
        .expect("proxy did not close the connection")
        .unwrap();

    assert_eq!(notice, "Error: Could not connect to slave at 127.0.0.1");
    proxy.stop().await;
}

#[tokio::test]
async fn test_unreachable_slave_after_send() {
    let proxy = spawn_proxy(dead_endpoint().await, options(None)).await;
    let mut master = TcpStream::connect(proxy.address).await.unwrap();
    master.write_all(b"status").await.unwrap();

    let mut notice = String::new();
    timeout(BOUND, master.read_to_string(&mut notice))
        .await
        .expect("proxy did not close the connection")
        .unwrap();

    assert_eq!(notice, "Error: Could not connect to slave at 127.0.0.1");
    proxy.stop().await;
}

#[tokio::test]
async fn test_concurrent_sessions_do_not_mix() {
    let slave = spawn_worker(primary_store(), options(None)).await;
    let proxy = spawn_proxy(slave.endpoint(), options(None)).await;
    let address = proxy.address;

    let sessions = (0..50).map(|idx| async move {
        let mut master = TcpStream::connect(address).await.unwrap();
        let command = format!("job-{idx}");
        (idx, exchange(&mut master, &command).await)
    });

    for (idx, response) in join_all(sessions).await {
        assert_eq!(response, format!("Slave processed: job-{idx}"));
    }

    proxy.stop().await;
    slave.stop().await;
}

#[tokio::test]
async fn test_master_close_closes_slave_side() {
    let fake_slave = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let target = HostEndpoint::new("127.0.0.1", fake_slave.local_addr().unwrap().port());
    let proxy = spawn_proxy(target, options(None)).await;

    let master = TcpStream::connect(proxy.address).await.unwrap();
    let (mut upstream, _) = fake_slave.accept().await.unwrap();
    drop(master);

    let mut rest = Vec::new();
    let read = timeout(BOUND, upstream.read_to_end(&mut rest))
        .await
        .expect("proxy kept the slave connection open")
        .unwrap();
    assert_eq!(read, 0);

    proxy.stop().await;
}

#[tokio::test]
async fn test_slave_close_closes_master_side() {
    let fake_slave = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let target = HostEndpoint::new("127.0.0.1", fake_slave.local_addr().unwrap().port());
    let proxy = spawn_proxy(target, options(None)).await;

    let mut master = TcpStream::connect(proxy.address).await.unwrap();
    let (mut upstream, _) = fake_slave.accept().await.unwrap();

    master.write_all(b"time").await.unwrap();
    let mut command = [0; 16];
    let read = upstream.read(&mut command).await.unwrap();
    assert_eq!(&command[..read], b"time");
    drop(upstream);

    let mut rest = Vec::new();
    let read = timeout(BOUND, master.read_to_end(&mut rest))
        .await
        .expect("proxy kept the master connection open")
        .unwrap();
    assert_eq!(read, 0);

    proxy.stop().await;
}

#[tokio::test]
async fn test_sessions_outlive_proxy_shutdown() {
    let slave = spawn_worker(primary_store(), options(None)).await;
    let proxy = spawn_proxy(slave.endpoint(), options(None)).await;
    let address = proxy.address;

    let mut master = TcpStream::connect(address).await.unwrap();
    assert_eq!(exchange(&mut master, "status").await, "Slave status: Running");

    proxy.stop().await;
    assert!(TcpStream::connect(address).await.is_err());
    assert_eq!(exchange(&mut master, "status").await, "Slave status: Running");

    slave.stop().await;
}
