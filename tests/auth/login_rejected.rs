use crate::common::{self, ACCOUNT};
use chrono::NaiveDate;
use erc_rs::{Credentials, ErcClient, ErcError};
use httpmock::Method::{GET, POST};
use url::Url;

#[tokio::test]
async fn non_redirect_login_fails_every_operation() {
    let server = common::setup_server();
    let login = common::mock_login(&server, 200);
    let office_post = server.mock(|when, then| {
        when.method(POST).path(common::OFFICE_PATH);
        then.status(200).body(common::cp1251(&common::balance_page()));
    });
    let office_get = server.mock(|when, then| {
        when.method(GET).path(common::OFFICE_PATH);
        then.status(200).body("irrelevant");
    });

    let client = common::client_for(&server);
    let date = NaiveDate::from_ymd_opt(2017, 2, 18).unwrap();

    let err = client.balance(ACCOUNT, date).await.unwrap_err();
    match err {
        ErcError::Auth(msg) => assert!(msg.contains("200"), "unexpected: {msg}"),
        other => panic!("expected Auth error, got {other:?}"),
    }
    assert!(client.accounts().await.unwrap_err().is_auth());
    assert!(client.receipt(ACCOUNT).await.unwrap_err().is_auth());

    // a failed login is not cached; every call tries again
    login.assert_calls(3);
    assert_eq!(office_post.calls(), 0, "balance must not be queried without a session");
    assert_eq!(office_get.calls(), 0, "pages must not be fetched without a session");
}

#[tokio::test]
async fn server_error_on_login_is_auth_error() {
    let server = common::setup_server();
    let _login = common::mock_login(&server, 500);

    let err = common::client_for(&server).accounts().await.unwrap_err();
    assert!(err.is_auth(), "expected Auth error, got {err:?}");
}

#[tokio::test]
async fn unreachable_portal_is_auth_error() {
    let client = ErcClient::builder(Credentials::new("user", "secret"))
        .login_url(Url::parse("http://127.0.0.1:1/login.htp").unwrap())
        .private_office_url(Url::parse("http://127.0.0.1:1/private_office.htp").unwrap())
        .build()
        .unwrap();

    match client.accounts().await.unwrap_err() {
        ErcError::Auth(msg) => assert!(msg.starts_with("transport failure"), "unexpected: {msg}"),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_form_carries_configured_credentials() {
    let server = common::setup_server();
    let login = common::mock_login(&server, 302);

    // the login mock only answers the exact smth/username/password form
    let client = ErcClient::builder(Credentials::new("user", "wrong"))
        .login_url(Url::parse(&format!("{}{}", server.base_url(), common::LOGIN_PATH)).unwrap())
        .private_office_url(
            Url::parse(&format!("{}{}", server.base_url(), common::OFFICE_PATH)).unwrap(),
        )
        .build()
        .unwrap();

    let err = client.accounts().await.unwrap_err();
    assert!(err.is_auth(), "expected Auth error, got {err:?}");
    login.assert_calls(0);
}
