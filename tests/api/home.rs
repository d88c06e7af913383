use crate::helpers::TestApp;

#[tokio::test]
async fn the_landing_page_is_public() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_page("/").await;

    // then
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Turn YouTube videos into email newsletters"));
    assert!(body.contains("/login"));
    assert!(body.contains("/signup"));
}
