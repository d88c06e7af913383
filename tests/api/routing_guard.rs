use crate::helpers::{assert_redirects_to, TestApp};

#[tokio::test]
async fn protected_pages_redirect_anonymous_visitors_to_login() {
    // given
    let app = TestApp::spawn().await;

    for path in ["/dashboard", "/history", "/newsletters/5"] {
        // when
        let response = app.get_page(path).await;

        // then
        assert_redirects_to(&response, &format!("/login?redirect={path}"));
    }
}

#[tokio::test]
async fn protected_form_submissions_redirect_anonymous_visitors_to_login() {
    // given
    let app = TestApp::spawn().await;
    let body = serde_urlencoded::to_string([(
        "youtube_url",
        "https://www.youtube.com/watch?v=abc123",
    )])
    .unwrap();

    // when
    let response = app.post_form("/dashboard", body).await;

    // then
    assert_redirects_to(&response, "/login?redirect=/dashboard");
}

#[tokio::test]
async fn no_generation_call_is_made_for_anonymous_visitors() {
    // given
    let app = TestApp::spawn().await;
    let body = serde_urlencoded::to_string([(
        "youtube_url",
        "https://www.youtube.com/watch?v=abc123",
    )])
    .unwrap();

    // when
    app.post_form("/dashboard", body).await;

    // then
    assert!(app.metadata_server.received_requests().await.unwrap().is_empty());
    assert!(app.transcript_server.received_requests().await.unwrap().is_empty());
    assert!(app.generative_server.received_requests().await.unwrap().is_empty());
}
