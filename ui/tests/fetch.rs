//! The fetch lifecycle against a real HTTP server.

use std::cell::RefCell;
use std::rc::Rc;

use payloads::requests::LoginCredentials;
use payloads::responses::LoginResponse;
use payloads::{Post, User};
use reqwest::Method;
use test_helpers::{
    ACCESS_TOKEN, ALICE_PASSWORD, alice, sample_posts, spawn_fixture_server,
    unreachable_url,
};
use tokio::task::LocalSet;
use ui::fetch::{FetchCause, FetchError, FetchHandle, FetchOptions, Transport};

fn client() -> Rc<dyn Transport> {
    Rc::new(ui::http_client())
}

#[tokio::test]
async fn successful_request_calls_on_success_once() -> anyhow::Result<()> {
    let server = spawn_fixture_server().await;
    LocalSet::new()
        .run_until(async move {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let options = FetchOptions::<Vec<Post>>::new()
                .on_success({
                    let seen = seen.clone();
                    move |posts: Option<&Vec<Post>>| {
                        seen.borrow_mut().push(posts.map(Vec::len))
                    }
                })
                .on_error(|e| panic!("unexpected error: {e}"));

            let handle =
                FetchHandle::new(client(), server.url("/api/posts"), options);
            assert!(handle.pending());

            let state = (&handle).await;
            assert!(!state.pending);
            assert_eq!(state.data, Some(sample_posts()));
            assert_eq!(state.error, None);
            assert_eq!(*seen.borrow(), vec![Some(2)]);
            Ok(())
        })
        .await
}

#[tokio::test]
async fn bad_status_reports_code_and_skips_body() -> anyhow::Result<()> {
    let server = spawn_fixture_server().await;
    LocalSet::new()
        .run_until(async move {
            let errors = Rc::new(RefCell::new(Vec::<FetchError>::new()));
            let options = FetchOptions::<User>::new().on_error({
                let errors = errors.clone();
                move |e| errors.borrow_mut().push(e.clone())
            });

            let state =
                FetchHandle::new(client(), server.url("/api/users/7"), options)
                    .await;
            let expected = FetchError {
                error: FetchCause::BadStatus,
                status_code: Some(404),
            };
            assert_eq!(state.data, None);
            assert_eq!(state.error, Some(expected.clone()));
            assert_eq!(*errors.borrow(), vec![expected]);

            let state = FetchHandle::<User>::new(
                client(),
                server.url("/api/explode"),
                FetchOptions::new(),
            )
            .await;
            assert_eq!(state.error.and_then(|e| e.status_code), Some(500));
            Ok(())
        })
        .await
}

#[tokio::test]
async fn bodies_without_length_or_exact_json_type_are_not_parsed()
-> anyhow::Result<()> {
    let server = spawn_fixture_server().await;
    LocalSet::new()
        .run_until(async move {
            for path in
                ["/api/chunked", "/api/empty", "/api/text", "/api/charset"]
            {
                let calls = Rc::new(RefCell::new(Vec::new()));
                let options = FetchOptions::<User>::new().on_success({
                    let calls = calls.clone();
                    move |user: Option<&User>| {
                        calls.borrow_mut().push(user.cloned())
                    }
                });

                let state =
                    FetchHandle::new(client(), server.url(path), options).await;
                assert!(!state.pending, "{path}");
                assert_eq!(state.data, None, "{path}");
                assert_eq!(state.error, None, "{path}");
                // success is still reported, just without a body
                assert_eq!(*calls.borrow(), vec![None], "{path}");
            }
            Ok(())
        })
        .await
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() -> anyhow::Result<()> {
    let server = spawn_fixture_server().await;
    LocalSet::new()
        .run_until(async move {
            let state = FetchHandle::<User>::new(
                client(),
                server.url("/api/broken"),
                FetchOptions::new(),
            )
            .await;

            let error = state.error.expect("parse failure");
            assert!(matches!(error.error, FetchCause::Parse(_)));
            assert_eq!(error.status_code, None);
            assert_eq!(state.data, None);
            Ok(())
        })
        .await
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() -> anyhow::Result<()> {
    // the fixture server only sets up logging here
    let _server = spawn_fixture_server().await;
    LocalSet::new()
        .run_until(async move {
            let errors = Rc::new(RefCell::new(0));
            let options = FetchOptions::<Vec<Post>>::new().on_error({
                let errors = errors.clone();
                move |_| *errors.borrow_mut() += 1
            });

            let state =
                FetchHandle::new(client(), unreachable_url(), options).await;
            let error = state.error.expect("transport failure");
            assert!(matches!(error.error, FetchCause::Transport(_)));
            assert_eq!(error.status_code, None);
            assert_eq!(*errors.borrow(), 1);
            Ok(())
        })
        .await
}

#[tokio::test]
async fn json_body_is_posted() -> anyhow::Result<()> {
    let server = spawn_fixture_server().await;
    LocalSet::new()
        .run_until(async move {
            let body = serde_json::json!({ "text": "hello", "tags": [1, 2] });
            let options = FetchOptions::<serde_json::Value>::new()
                .method(Method::POST)
                .json_body(&body)?;

            let state =
                FetchHandle::new(client(), server.url("/api/echo"), options)
                    .await;
            assert_eq!(state.data, Some(body));
            Ok(())
        })
        .await
}

#[tokio::test]
async fn login_round_trip() -> anyhow::Result<()> {
    let server = spawn_fixture_server().await;
    LocalSet::new()
        .run_until(async move {
            let good = FetchOptions::<LoginResponse>::new()
                .method(Method::POST)
                .json_body(&LoginCredentials {
                    username: "alice".into(),
                    password: ALICE_PASSWORD.into(),
                })?;
            let state =
                FetchHandle::new(client(), server.url("/api/login"), good)
                    .await;
            let response = state.data.expect("logged in");
            assert_eq!(response.user, alice());
            assert_eq!(response.access_token, ACCESS_TOKEN);

            let bad = FetchOptions::<LoginResponse>::new()
                .method(Method::POST)
                .json_body(&LoginCredentials {
                    username: "alice".into(),
                    password: "wrong".into(),
                })?;
            let state =
                FetchHandle::new(client(), server.url("/api/login"), bad).await;
            assert_eq!(state.error.and_then(|e| e.status_code), Some(401));
            Ok(())
        })
        .await
}

#[tokio::test]
async fn refresh_fetches_again() -> anyhow::Result<()> {
    let server = spawn_fixture_server().await;
    LocalSet::new()
        .run_until(async move {
            let calls = Rc::new(RefCell::new(0));
            let options = FetchOptions::<User>::new().on_success({
                let calls = calls.clone();
                move |_| *calls.borrow_mut() += 1
            });
            let handle =
                FetchHandle::new(client(), server.url("/api/users/42"), options);
            (&handle).await;

            handle.refresh();
            assert!(handle.pending());
            assert_eq!(handle.data(), None);

            let state = (&handle).await;
            assert_eq!(state.data, Some(alice()));
            assert_eq!(*calls.borrow(), 2);
            Ok(())
        })
        .await
}
