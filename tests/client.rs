use mockito::{Matcher, Mock, Server, ServerGuard};
use monday::{Args, Client, Error, ErrorKind};
use serde::Deserialize;
use serde_json::json;

const TOKEN: &str = "test-token";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn client(server: &ServerGuard) -> Client {
    Client::builder()
        .host(format!("{}/v2", server.url()))
        .token(TOKEN)
        .build()
        .unwrap()
}

async fn expect_document(server: &mut ServerGuard, document: &str) -> Mock {
    server
        .mock("POST", "/v2")
        .match_body(Matcher::Json(json!({ "query": document })))
        .with_status(200)
        .with_body(r#"{"data": {}}"#)
        .create_async()
        .await
}

#[tokio::test]
async fn query_boards() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2")
        .match_header("authorization", TOKEN)
        .match_header("content-type", "application/json")
        .match_header("api-version", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "query": "query { boards(ids: [123]) { id name description } }"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"boards": [{"id": "123", "name": "Roadmap", "description": null}]}, "account_id": 1}"#)
        .create_async()
        .await;

    #[derive(Debug, Deserialize)]
    struct Board {
        id: String,
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct Boards {
        boards: Vec<Board>,
    }

    let client = client(&server);
    let response = client
        .boards()
        .query(&Args::new().arg("ids", vec![123]), None)
        .await
        .unwrap();

    assert!(response.is_success());
    let data: Boards = response.deserialize_data().unwrap();
    assert_eq!(data.boards[0].id, "123");
    assert_eq!(data.boards[0].name, "Roadmap");

    mock.assert_async().await;
}

#[tokio::test]
async fn api_version_header() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2")
        .match_header("api-version", "2024-01")
        .with_status(200)
        .with_body(r#"{"data": {"users": [{"account": {"id": "1", "name": "Acme"}}]}}"#)
        .create_async()
        .await;

    let client = Client::builder()
        .host(format!("{}/v2", server.url()))
        .token(TOKEN)
        .version("2024-01")
        .build()
        .unwrap();

    let response = client.account().query(None).await.unwrap();
    assert_eq!(response.data().unwrap()["users"][0]["account"]["name"], "Acme");

    mock.assert_async().await;
}

#[tokio::test]
async fn mutation_without_selection() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2")
        .match_body(Matcher::Json(json!({
            "query": "mutation { update_board(board_id: 123, board_attribute: description, new_value: \"Updated description\") }"
        })))
        .with_status(200)
        .with_body(r#"{"data": {"update_board": "{\"success\":true}"}}"#)
        .create_async()
        .await;

    let args = Args::new()
        .arg("board_id", 123)
        .arg("board_attribute", "description")
        .arg("new_value", "Updated description");
    client(&server).boards().update(&args).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn column_values_are_json_encoded() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2")
        .match_body(Matcher::Json(json!({
            "query": r#"mutation { change_multiple_column_values(board_id: 123, item_id: 456, column_values: "{\"status\":{\"label\":\"Done\"}}") { id name } }"#
        })))
        .with_status(200)
        .with_body(r#"{"data": {"change_multiple_column_values": {"id": "456", "name": "Task"}}}"#)
        .create_async()
        .await;

    client(&server)
        .columns()
        .change_multiple_values(123, 456, json!({ "status": { "label": "Done" } }), None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn nested_group_items_page() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2")
        .match_body(Matcher::Json(json!({
            "query": "query { boards(ids: 123) { groups(ids: \"topics\") { items_page(limit: 2) { cursor items { id name } } } } }"
        })))
        .with_status(200)
        .with_body(r#"{"data": {"boards": []}}"#)
        .create_async()
        .await;

    client(&server)
        .groups()
        .items_page(123, "topics", &Args::new().arg("limit", 2), None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn ok_status_with_error_code() {
    init_logger();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v2")
        .with_status(200)
        .with_body(
            r#"{
                "error_code": "InvalidBoardIdException",
                "status_code": 200,
                "error_message": "Board not found",
                "error_data": {"board_id": 999}
            }"#,
        )
        .create_async()
        .await;

    let err = client(&server)
        .boards()
        .delete(999, None)
        .await
        .unwrap_err();

    let api = err.api().unwrap();
    assert_eq!(api.kind(), ErrorKind::InvalidRequest);
    assert_eq!(api.code(), 400);
    assert_eq!(api.message(), "InvalidBoardIdException: Board not found");
    assert_eq!(api.error_data()["board_id"], 999);
    assert_eq!(api.response().status().as_u16(), 200);
}

#[tokio::test]
async fn ok_status_with_complexity_error() {
    init_logger();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v2")
        .with_status(200)
        .with_body(
            r#"{
                "errors": [{
                    "message": "Complexity budget exhausted, query cost 30001 budget remaining 10000",
                    "extensions": {"code": "ComplexityException"}
                }],
                "account_id": 1
            }"#,
        )
        .create_async()
        .await;

    let err = client(&server)
        .items()
        .query(&Args::new().arg("ids", vec![1, 2, 3]), None)
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.kind(), ErrorKind::Complexity);
            assert!(api.message().contains("Complexity budget exhausted"));
            assert!(api.error_data().is_empty());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_status() {
    init_logger();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v2")
        .with_status(401)
        .with_body(r#"{"errors": ["Not Authenticated"]}"#)
        .create_async()
        .await;

    let err = client(&server)
        .workspaces()
        .query(&Args::new(), None)
        .await
        .unwrap_err();

    let api = err.api().unwrap();
    assert_eq!(api.kind(), ErrorKind::Authorization);
    assert_eq!(api.code(), 401);
}

#[tokio::test]
async fn rate_limited_status() {
    init_logger();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v2")
        .with_status(429)
        .with_header("retry-after", "30")
        .with_body(r#"{"error_message": "Rate limit exceeded"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .updates()
        .like(1, None)
        .await
        .unwrap_err();

    let api = err.api().unwrap();
    assert_eq!(api.kind(), ErrorKind::RateLimit);
    assert_eq!(api.code(), 429);
    assert_eq!(api.message(), "Rate limit exceeded");
    assert_eq!(api.response().header("retry-after"), Some("30"));
}

#[tokio::test]
async fn malformed_body() {
    init_logger();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v2")
        .with_status(200)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client(&server)
        .folders()
        .query(&Args::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn activity_logs_of_boards() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = expect_document(
        &mut server,
        "query { boards(ids: [123]) { activity_logs(limit: 10) { id event data } } }",
    )
    .await;

    client(&server)
        .activity_logs()
        .query(&[123], &Args::new().arg("limit", 10), None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn board_views() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = expect_document(
        &mut server,
        "query { boards(ids: 123) { views { id name type } } }",
    )
    .await;

    client(&server)
        .board_views()
        .query(&Args::new().arg("ids", 123), None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn subitems_of_items() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = expect_document(
        &mut server,
        "query { items(ids: [456]) { subitems { id name created_at } } }",
    )
    .await;

    client(&server)
        .subitems()
        .query(&Args::new().arg("ids", vec![456]), None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn create_subitem() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = expect_document(
        &mut server,
        "mutation { create_subitem(parent_item_id: 456, item_name: \"New subitem\") { id name created_at } }",
    )
    .await;

    let args = Args::new()
        .arg("parent_item_id", 456)
        .arg("item_name", "New subitem");
    client(&server)
        .subitems()
        .create(&args, None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_board_subscribers() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = expect_document(
        &mut server,
        "mutation { delete_subscribers_from_board(board_id: 123, user_ids: [1, 2]) { id } }",
    )
    .await;

    client(&server)
        .boards()
        .delete_subscribers(123, &[1, 2], None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn items_page_by_column_values() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = expect_document(
        &mut server,
        "query { items_page_by_column_values(board_id: 123, columns: [{column_id: \"status\", column_values: [\"Done\"]}], limit: 50) { cursor items { id name } } }",
    )
    .await;

    let columns = vec![json!({"column_id": "status", "column_values": ["Done"]})];
    client(&server)
        .items()
        .page_by_column_values(123, &columns, &Args::new().arg("limit", 50), None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_update() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = expect_document(&mut server, "mutation { delete_update(id: 789) { id } }").await;

    client(&server)
        .updates()
        .delete(789, None)
        .await
        .unwrap();

    mock.assert_async().await;
}
