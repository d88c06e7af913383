use crate::helpers::TestApp;

#[tokio::test]
async fn the_login_form_is_public() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_page("/login").await;

    // then
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"name="email""#));
    assert!(body.contains(r#"name="password""#));
}

#[tokio::test]
async fn the_login_form_carries_the_redirect_parameter() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_page("/login?redirect=/history").await;

    // then
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"name="redirect" value="/history""#));
}

#[tokio::test]
async fn a_malformed_login_form_is_rejected() {
    // given
    let app = TestApp::spawn().await;
    let body = serde_urlencoded::to_string([("email", "user@example.com")]).unwrap();

    // when
    let response = app.post_form("/login", body).await;

    // then
    assert_eq!(response.status(), 422);
}
