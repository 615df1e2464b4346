//! End-to-end suggestion flow over a mocked transport.
//!
//! These tests drive `SuggestionClient` from request to extracted
//! suggestions, covering:
//! - Stream reassembly across arbitrary chunk boundaries
//! - Noise and malformed payloads inside the stream
//! - Every strategy of the extraction chain
//! - Every fixed diagnostic list

mod common;

use bytes::Bytes;
use common::{mock_client, sse_body, sse_event};
use smart_todo::adapters::mock::MockResponse;
use smart_todo::error::SuggestError;
use smart_todo::suggest::{extract_suggestions, Diagnostic, MAX_SUGGESTIONS};
use smart_todo::traits::HttpError;

/// Split `body` into chunks of `size` bytes, ignoring char boundaries.
fn byte_chunks(body: &str, size: usize) -> MockResponse {
    MockResponse::Stream {
        status: 200,
        chunks: body
            .as_bytes()
            .chunks(size)
            .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
            .collect(),
    }
}

// ============================================================================
// Stream reassembly
// ============================================================================

#[tokio::test]
async fn test_numbered_list_from_fragments() {
    let client = mock_client(MockResponse::chunks([sse_body(&[
        "1. Buy milk\n",
        "2. Call Al",
        "ice\n3. Book flight",
    ])]));

    assert_eq!(
        client.suggest("Go shopping").await,
        vec!["Buy milk", "Call Alice", "Book flight"]
    );
}

#[tokio::test]
async fn test_any_chunking_gives_same_result() {
    let body = sse_body(&[
        "1. Café ☕ run\n",
        "2. Pay the électricité bill\n",
        "3. Water plants",
    ]);
    let expected = vec!["Café ☕ run", "Pay the électricité bill", "Water plants"];

    for size in [1, 2, 3, 7, 64, body.len()] {
        let client = mock_client(byte_chunks(&body, size));
        assert_eq!(client.suggest("Errands").await, expected, "chunk size {}", size);
    }
}

#[tokio::test]
async fn test_crlf_line_endings() {
    let body = sse_body(&["1. A\n2. B\n3. C"]).replace('\n', "\r\n");
    // Only the SSE framing uses CRLF; the JSON escapes stay intact.
    let client = mock_client(MockResponse::chunks([body]));
    assert_eq!(client.suggest("x").await, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_noise_lines_are_ignored() {
    let body = format!(
        "{}{}{}data:{{\"textResponse\":\"missing space\"}}\n",
        ": heartbeat\nevent: message\nid: 7\nretry: 1000\n\n",
        "garbage line\n",
        sse_event("1. A\n2. B\n3. C")
    );
    let client = mock_client(MockResponse::chunks([body]));
    assert_eq!(client.suggest("x").await, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_malformed_payload_does_not_abort() {
    let body = format!(
        "{}data: {{not json\n\ndata: [1,2,3]\n\ndata: {{\"textResponse\":null}}\n\n{}",
        sse_event("1. First task\n"),
        sse_event("2. Second task")
    );
    let client = mock_client(MockResponse::chunks([body]));
    assert_eq!(client.suggest("x").await, vec!["First task", "Second task"]);
}

#[tokio::test]
async fn test_invalid_utf8_line_is_dropped() {
    let mut bytes = b"data: {\"textResponse\":\"\xff\xfe\"}\n\n".to_vec();
    bytes.extend_from_slice(sse_event("1. Kept").as_bytes());
    let client = mock_client(MockResponse::Stream {
        status: 200,
        chunks: vec![Ok(Bytes::from(bytes))],
    });
    assert_eq!(client.suggest("x").await, vec!["Kept"]);
}

// ============================================================================
// Extraction chain through the client
// ============================================================================

#[tokio::test]
async fn test_out_of_order_numbering_is_sorted() {
    let client = mock_client(MockResponse::sse_fragments(["2. Second\n1. First\n3. Third"]));
    assert_eq!(client.suggest("x").await, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_five_items_truncated_to_three() {
    let client = mock_client(MockResponse::sse_fragments([
        "5. Five\n4. Four\n3. Three\n2. Two\n1. One",
    ]));
    let suggestions = client.suggest("x").await;
    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    assert_eq!(suggestions, vec!["One", "Two", "Three"]);
}

#[tokio::test]
async fn test_sentences_fallback() {
    let client = mock_client(MockResponse::sse_fragments([
        "Buy groceries today. Call the dentist tomorrow. ",
        "Finish the report by Friday.",
    ]));
    assert_eq!(
        client.suggest("x").await,
        vec![
            "Buy groceries today",
            "Call the dentist tomorrow",
            "Finish the report by Friday"
        ]
    );
}

#[tokio::test]
async fn test_verbatim_fallback() {
    let client = mock_client(MockResponse::sse_fragments(["Stretch", " now"]));
    assert_eq!(client.suggest("x").await, vec!["Stretch now"]);
}

#[tokio::test]
async fn test_empty_text_could_not_parse() {
    let client = mock_client(MockResponse::chunks([sse_body(&[])]));
    assert_eq!(
        client.suggest("x").await,
        vec![
            "Could not parse response",
            "Try different task description",
            "Check API documentation"
        ]
    );
}

#[tokio::test]
async fn test_results_are_bounded_and_non_empty() {
    let inputs = [
        "",
        "   \n\t",
        "1.\n2.\n",
        "Hi.",
        "One sentence only without a stop",
        "1) a\n2) b\n3) c\n4) d",
        "First line\nSecond line\nThird line\nFourth line",
        "!!!...???",
    ];
    for input in inputs {
        let client = mock_client(MockResponse::sse_fragments([input]));
        let suggestions = client.suggest("x").await;
        assert!(
            (1..=MAX_SUGGESTIONS).contains(&suggestions.len()),
            "{:?} -> {:?}",
            input,
            suggestions
        );
        assert!(suggestions.iter().all(|s| !s.trim().is_empty()), "{:?}", input);
    }
}

#[tokio::test]
async fn test_repeated_requests_are_independent() {
    let client = mock_client(MockResponse::sse_fragments(["1. A\n2. B"]));
    let first = client.suggest("x").await;
    let second = client.suggest("x").await;
    assert_eq!(first, second);
    assert_eq!(extract_suggestions("1. A\n2. B"), first);
}

#[tokio::test]
async fn test_concurrent_requests_share_client() {
    let client = mock_client(MockResponse::sse_fragments(["1. A\n2. B"]));
    let (a, b) = tokio::join!(client.suggest("one"), client.suggest("two"));
    assert_eq!(a, b);
    assert_eq!(client.http().get_requests().len(), 2);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[tokio::test]
async fn test_connection_refused() {
    let client = mock_client(MockResponse::Error(HttpError::ConnectionFailed(
        "connection refused".to_string(),
    )));
    let suggestions = client.suggest("x").await;
    assert_eq!(
        suggestions,
        vec![
            "Connection error",
            "Check network connection",
            "Verify API endpoint"
        ]
    );
    assert_eq!(Diagnostic::recognize(&suggestions), Some(Diagnostic::ConnectionError));
}

#[tokio::test]
async fn test_server_error_status() {
    let client = mock_client(MockResponse::status(500, "{\"error\":\"boom\"}"));
    assert_eq!(
        client.suggest("x").await,
        vec![
            "Check API connection",
            "Make sure the model is running",
            "Verify API key"
        ]
    );

    let err = client.try_suggest("x").await.unwrap_err();
    assert!(matches!(err, SuggestError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_stream_interrupted() {
    let client = mock_client(MockResponse::Stream {
        status: 200,
        chunks: vec![
            Ok(Bytes::from(sse_event("1. Partial"))),
            Err(HttpError::Io("unexpected EOF".to_string())),
        ],
    });
    assert_eq!(
        client.suggest("x").await,
        vec![
            "Error processing streaming response",
            "Check logs for details",
            "Try again later"
        ]
    );
}

#[tokio::test]
async fn test_unexpected_failure() {
    let client = mock_client(MockResponse::Error(HttpError::Other("tls".to_string())));
    assert_eq!(
        client.suggest("x").await,
        vec!["Unexpected error", "Check logs for details", "Try again later"]
    );
}
