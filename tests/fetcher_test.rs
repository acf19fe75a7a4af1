use chrono::NaiveDate;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordle_solutions::application::SolutionFetcher;
use wordle_solutions::infrastructure::external::nyt::{FetchError, NytClient};
use wordle_solutions::infrastructure::external::nyt_adapter::NytSolutionFetcher;

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, day).unwrap()
}

async fn serve(body: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021-06-19.json"))
        .respond_with(body)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn solution_is_uppercased() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021-06-19.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "solution": "crane",
            "print_date": "2021-06-19",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = NytSolutionFetcher::new(&server.uri(), Duration::from_secs(5)).unwrap();
    assert_eq!(fetcher.fetch(june(19)).await.as_deref(), Some("CRANE"));
}

#[tokio::test]
async fn non_200_status_is_no_result() {
    let server = serve(ResponseTemplate::new(404)).await;

    let client = NytClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let err = client.fetch_solution(june(19)).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 404));

    let fetcher = NytSolutionFetcher::new(&server.uri(), Duration::from_secs(5)).unwrap();
    assert!(fetcher.fetch(june(19)).await.is_none());
}

#[tokio::test]
async fn malformed_json_is_no_result() {
    let server = serve(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let client = NytClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let err = client.fetch_solution(june(19)).await.unwrap_err();
    assert!(matches!(err, FetchError::Body(_)));
}

#[tokio::test]
async fn absent_or_empty_solution_is_no_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2021-06-19.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2021-06-20.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "solution": "" })))
        .mount(&server)
        .await;

    let client = NytClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    assert!(matches!(
        client.fetch_solution(june(19)).await,
        Err(FetchError::MissingSolution)
    ));
    assert!(matches!(
        client.fetch_solution(june(20)).await,
        Err(FetchError::MissingSolution)
    ));
}

/// タイムアウトは 1 回で諦める
#[tokio::test]
async fn slow_response_times_out() {
    let server = serve(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "solution": "crane" }))
            .set_delay(Duration::from_millis(500)),
    )
    .await;

    let fetcher = NytSolutionFetcher::new(&server.uri(), Duration::from_millis(50)).unwrap();
    assert!(fetcher.fetch(june(19)).await.is_none());
}

#[tokio::test]
async fn unreachable_host_is_no_result() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let fetcher = NytSolutionFetcher::new(&uri, Duration::from_secs(1)).unwrap();
    assert!(fetcher.fetch(june(19)).await.is_none());
}
