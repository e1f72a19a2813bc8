use crate::common::{self, ACCOUNT};
use chrono::NaiveDate;
use erc_rs::{Details, ErcError};
use httpmock::Method::POST;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 2, 18).unwrap()
}

#[tokio::test]
async fn balance_decodes_and_maps_ledger_table() {
    let server = common::setup_server();
    let _login = common::mock_login(&server, 302);
    let data = server.mock(|when, then| {
        when.method(POST)
            .path(common::OFFICE_PATH)
            .query_param("ls", ACCOUNT)
            .header("cookie", "PHPSESSID=abc123")
            .form_urlencoded_tuple("show", "3")
            .form_urlencoded_tuple("s_Date", "18-01-2017")
            .form_urlencoded_tuple("e_Date", "18-02-2017");
        then.status(200)
            .header("content-type", "text/html; charset=windows-1251")
            .body(common::cp1251(&common::balance_page()));
    });

    let info = common::client_for(&server)
        .balance(ACCOUNT, reference_date())
        .await
        .unwrap();
    data.assert();

    assert_eq!(info.month, "Январь 2017");
    assert_eq!(
        info.credit,
        Details {
            total: 100.0,
            company_part: 60.0,
            repair_part: 40.0
        }
    );
    assert_eq!(info.debit.total, 90.0);
    assert_eq!(info.at_the_end.total, 19.75);
    assert_eq!(
        info.at_the_end.total,
        info.at_the_end.company_part + info.at_the_end.repair_part
    );
}

#[tokio::test]
async fn redirect_on_query_is_blocked() {
    let server = common::setup_server();
    let _login = common::mock_login(&server, 302);
    let data = server.mock(|when, then| {
        when.method(POST).path(common::OFFICE_PATH);
        then.status(302).header("location", common::LOGIN_PATH);
    });

    let err = common::client_for(&server)
        .balance(ACCOUNT, reference_date())
        .await
        .unwrap_err();
    data.assert();

    assert!(err.is_fetch());
    match err {
        ErcError::RedirectBlocked {
            status, location, ..
        } => {
            assert_eq!(status, 302);
            assert_eq!(location.as_deref(), Some(common::LOGIN_PATH));
        }
        other => panic!("expected RedirectBlocked, got {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_query_is_status_error() {
    let server = common::setup_server();
    let _login = common::mock_login(&server, 302);
    let _data = server.mock(|when, then| {
        when.method(POST).path(common::OFFICE_PATH);
        then.status(500).body("oops");
    });

    let err = common::client_for(&server)
        .balance(ACCOUNT, reference_date())
        .await
        .unwrap_err();

    match err {
        ErcError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("ls=300200100"), "unexpected url {url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn page_without_table_is_no_match() {
    let server = common::setup_server();
    let _login = common::mock_login(&server, 302);
    let _data = server.mock(|when, then| {
        when.method(POST).path(common::OFFICE_PATH);
        then.status(200)
            .body(common::cp1251("<html><body>Сеанс завершен</body></html>"));
    });

    let err = common::client_for(&server)
        .balance(ACCOUNT, reference_date())
        .await
        .unwrap_err();
    assert!(matches!(err, ErcError::NoMatch { page: "balance" }));
}
