use super::*;
use actix_web::{
  http::{Method, StatusCode},
  test,
};

fn shared_store() -> web::Data<dyn Storage> {
  let store: Arc<dyn Storage> = Arc::new(Store::open().expect("failed to open store for test"));
  web::Data::from(store)
}

macro_rules! test_app {
  () => {
    test::init_service(
      App::new()
        .app_data(shared_store())
        .service(get_handler)
        .service(put_handler)
        .service(delete_handler)
        .default_service(web::route().to(fallback)),
    )
    .await
  };
}

#[actix_web::test]
async fn test_put_get_delete_roundtrip() {
  let app = test_app!();

  let req = test::TestRequest::put()
    .uri("/key1")
    .set_payload("VAL1")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  let body = test::read_body(resp).await;
  assert!(body.is_empty());

  let req = test::TestRequest::get().uri("/key1").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = test::read_body(resp).await;
  assert_eq!(body, web::Bytes::from_static(b"VAL1"));

  let req = test::TestRequest::delete().uri("/key1").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  let body = test::read_body(resp).await;
  assert!(body.is_empty());

  let req = test::TestRequest::get().uri("/key1").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_missing_key_responses() {
  let app = test_app!();

  let req = test::TestRequest::get().uri("/_notfound").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let req = test::TestRequest::delete().uri("/_notfound").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_root_path_is_rejected_for_all_methods() {
  let app = test_app!();

  for method in [Method::GET, Method::PUT, Method::DELETE, Method::POST] {
    let req = test::TestRequest::default()
      .method(method.clone())
      .uri("/")
      .set_payload("VAL1")
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "method {method}");
  }
}

#[actix_web::test]
async fn test_empty_put_body_is_rejected() {
  let app = test_app!();

  let req = test::TestRequest::put().uri("/key2").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unsupported_method() {
  let app = test_app!();

  for method in [Method::POST, Method::PATCH, Method::HEAD] {
    let req = test::TestRequest::default()
      .method(method.clone())
      .uri("/key1")
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
      resp.status(),
      StatusCode::METHOD_NOT_ALLOWED,
      "method {method}"
    );
  }
}

#[actix_web::test]
async fn test_key_with_embedded_slashes() {
  let app = test_app!();

  let req = test::TestRequest::put()
    .uri("/nested/path/key")
    .set_payload("deep value")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let req = test::TestRequest::get().uri("/nested/path/key").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = test::read_body(resp).await;
  assert_eq!(body, web::Bytes::from_static(b"deep value"));
}

#[actix_web::test]
async fn test_overwrite_returns_latest_value() {
  let app = test_app!();

  for value in ["first", "second"] {
    let req = test::TestRequest::put()
      .uri("/key1")
      .set_payload(value)
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  }

  let req = test::TestRequest::get().uri("/key1").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = test::read_body(resp).await;
  assert_eq!(body, web::Bytes::from_static(b"second"));
}
