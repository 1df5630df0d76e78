use anyhow::Result;

use super::Candidate;
use super::Content;
use super::Gemini;
use super::GenerateResponse;
use super::Model;
use super::ModelListResponse;
use super::Part;
use crate::domain::models::Backend;

impl Gemini {
    fn with_url(url: String) -> Gemini {
        return Gemini {
            url,
            token: "abc".to_string(),
            timeout: "200".to_string(),
            request_timeout: "9000".to_string(),
        };
    }
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/").with_status(200).create_async().await;

    let backend = Gemini::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/").with_status(500).create_async().await;

    let backend = Gemini::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_lists_models() -> Result<()> {
    let body = serde_json::to_string(&ModelListResponse {
        models: vec![
            Model {
                name: "models/gemini-2.5-flash".to_string(),
            },
            Model {
                name: "models/gemini-2.5-pro".to_string(),
            },
        ],
    })?;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1beta/models")
        .match_header("x-goog-api-key", "abc")
        .with_status(200)
        .with_body(body)
        .create_async().await;

    let backend = Gemini::with_url(server.url());
    let res = backend.list_models().await?;
    mock.assert_async().await;

    assert_eq!(
        res,
        vec!["gemini-2.5-flash".to_string(), "gemini-2.5-pro".to_string()]
    );

    return Ok(());
}

#[tokio::test]
async fn it_generates_a_reply() -> Result<()> {
    let body = serde_json::to_string(&GenerateResponse {
        candidates: vec![Candidate {
            content: Content {
                parts: vec![Part {
                    text: "Correct! Generics erase to Object at runtime.".to_string(),
                }],
            },
        }],
    })?;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-flash:generateContent",
        )
        .match_header("x-goog-api-key", "abc")
        .with_status(200)
        .with_body(body)
        .create_async().await;

    let backend = Gemini::with_url(server.url());
    let res = backend.generate("Evaluate the answer.").await?;
    mock.assert_async().await;

    assert_eq!(res, "Correct! Generics erase to Object at runtime.");

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_an_empty_candidate_list() -> Result<()> {
    let body = serde_json::to_string(&GenerateResponse { candidates: vec![] })?;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-flash:generateContent",
        )
        .with_status(200)
        .with_body(body)
        .create_async().await;

    let backend = Gemini::with_url(server.url());
    let res = backend.generate("Evaluate the answer.").await;
    mock.assert_async().await;

    assert!(res.is_err());

    return Ok(());
}
