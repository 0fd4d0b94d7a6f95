//! Integration tests for `ApiClient` against an in-process server.

use std::sync::Arc;

use clap::Parser;
use mitsumori_client::{api::ApiClient, error::ClientError};
use mitsumori_server::{app::App, config::Config, ui::Server};
use mitsumori_shared::time::SystemClock;
use tokio::{net::TcpListener, sync::oneshot};

const PASSWORD: &str = "client-test-password";

/// Running server plus a client pointed at it
struct TestServer {
    api: ApiClient,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start(max_participants: usize) -> Self {
        let max = max_participants.to_string();
        let config = Config::try_parse_from([
            "mitsumori-server",
            "--host-password",
            PASSWORD,
            "--max-participants",
            &max,
        ])
        .expect("valid test config");

        let app = App::build(&config, Arc::new(SystemClock))
            .await
            .expect("failed to build app");
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("no local addr");

        let (tx, rx) = oneshot::channel::<()>();
        let server = Server::new(app.state);
        tokio::spawn(async move {
            let _ = server
                .serve(listener, async {
                    let _ = rx.await;
                })
                .await;
        });

        TestServer {
            api: ApiClient::new(format!("http://{}/", addr)),
            shutdown: Some(tx),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

#[tokio::test]
async fn test_voting_round_through_client() {
    // テスト項目: クライアント経由で 1 ラウンドを完了できる
    // given (前提条件):
    let server = TestServer::start(50).await;
    let api = &server.api;
    let alice = api.join(None).await.unwrap();
    let bob = api.join(None).await.unwrap();
    let token = api.host_login(PASSWORD).await.unwrap();

    // when (操作):
    api.host_start(&token).await.unwrap();
    api.vote(&alice.user_id, "5").await.unwrap();
    api.vote(&bob.user_id, " ? ").await.unwrap();
    let count = api.vote_count().await.unwrap();
    api.host_end(&token).await.unwrap();

    // then (期待する結果):
    assert_eq!(count.voted, 2);
    assert_eq!(count.total, 2);
    assert_eq!(api.session_status().await.unwrap().status, "ended");

    let results = api.final_votes().await.unwrap();
    let mut votes: Vec<_> = results.votes.iter().map(|v| v.vote.as_str()).collect();
    votes.sort();
    assert_eq!(votes, vec!["5", "?"]);

    let host = api.host_status(&token).await.unwrap();
    assert_eq!(host.all_users.len(), 2);
    assert_eq!(host.distribution.len(), 2);
}

#[tokio::test]
async fn test_rejoin_keeps_nickname() {
    // テスト項目: 同じ user_id で再参加するとニックネームが維持される
    // given (前提条件):
    let server = TestServer::start(50).await;
    let first = server.api.join(None).await.unwrap();

    // when (操作):
    let again = server.api.join(Some(&first.user_id)).await.unwrap();

    // then (期待する結果):
    assert_eq!(again, first);
    assert_eq!(server.api.participants().await.unwrap().total_users, 1);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    // テスト項目: パスワード違いは 401 として返る
    // given (前提条件):
    let server = TestServer::start(50).await;

    // when (操作):
    let err = server.api.host_login("nope").await.unwrap_err();

    // then (期待する結果):
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_logged_out_token_is_rejected() {
    // テスト項目: ログアウト後のトークンは使えない
    // given (前提条件):
    let server = TestServer::start(50).await;
    let token = server.api.host_login(PASSWORD).await.unwrap();

    // when (操作):
    server.api.host_logout(&token).await.unwrap();
    let err = server.api.host_start(&token).await.unwrap_err();

    // then (期待する結果):
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_capacity_error_carries_server_message() {
    // テスト項目: 定員超過はサーバのエラーメッセージ付きで返る
    // given (前提条件):
    let server = TestServer::start(1).await;
    server.api.join(None).await.unwrap();

    // when (操作):
    let err = server.api.join(None).await.unwrap_err();

    // then (期待する結果):
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 403);
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_clear_returns_removed_count() {
    // テスト項目: clear で削除数が返り、参加者が空になる
    // given (前提条件):
    let server = TestServer::start(50).await;
    server.api.join(None).await.unwrap();
    server.api.join(None).await.unwrap();
    let token = server.api.host_login(PASSWORD).await.unwrap();

    // when (操作):
    let cleared = server.api.host_clear(&token).await.unwrap();

    // then (期待する結果):
    assert_eq!(cleared, 2);
    assert_eq!(server.api.participants().await.unwrap().total_users, 0);
}
