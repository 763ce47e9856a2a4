//! HTTP surface for pathkv: the URL path is the key, the request and
//! response bodies are the value.
//!
//! Handlers consume the store only through the `Storage` trait, so the
//! backend can be swapped without touching this file. Status mapping:
//! `KeyNotFound` becomes 404, every other storage error becomes 500 with
//! the engine's message forwarded in the body.

use std::{env, sync::Arc};

use actix_web::{
  delete, get, middleware, put, web, App, HttpRequest, HttpResponse, HttpServer,
};
use log::{error, info};
use pathkv::{db::Store, errors::Errors, storage::Storage};

#[cfg(test)]
mod test;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "12345";

/// Resolves the storage key from the request: the full URL path including
/// the leading slash. The bare root path carries no key.
fn request_key(req: &HttpRequest) -> Option<web::Bytes> {
  let path = req.path();
  if path == "/" {
    return None;
  }
  Some(web::Bytes::copy_from_slice(path.as_bytes()))
}

fn empty_key_response() -> HttpResponse {
  HttpResponse::NotFound().body("key must not be empty")
}

#[get("/{key:.*}")]
async fn get_handler(req: HttpRequest, store: web::Data<dyn Storage>) -> HttpResponse {
  let key = match request_key(&req) {
    Some(key) => key,
    None => return empty_key_response(),
  };

  match store.get(key) {
    Ok(value) => HttpResponse::Ok().body(value),
    Err(err @ Errors::KeyNotFound) => HttpResponse::NotFound().body(err.to_string()),
    Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
  }
}

#[put("/{key:.*}")]
async fn put_handler(
  req: HttpRequest,
  body: web::Bytes,
  store: web::Data<dyn Storage>,
) -> HttpResponse {
  let key = match request_key(&req) {
    Some(key) => key,
    None => return empty_key_response(),
  };
  if body.is_empty() {
    return HttpResponse::BadRequest().body("value must not be empty");
  }

  match store.set(key, body) {
    Ok(()) => HttpResponse::NoContent().finish(),
    Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
  }
}

#[delete("/{key:.*}")]
async fn delete_handler(req: HttpRequest, store: web::Data<dyn Storage>) -> HttpResponse {
  let key = match request_key(&req) {
    Some(key) => key,
    None => return empty_key_response(),
  };

  match store.del(key) {
    Ok(()) => HttpResponse::NoContent().finish(),
    Err(err @ Errors::KeyNotFound) => HttpResponse::NotFound().body(err.to_string()),
    Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
  }
}

/// Catches every request the method-specific handlers do not: unsupported
/// methods, plus the empty-key policy for those methods.
async fn fallback(req: HttpRequest) -> HttpResponse {
  if req.path() == "/" {
    return empty_key_response();
  }
  HttpResponse::MethodNotAllowed().body("method not allowed")
}

fn listen_addr() -> String {
  let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
  let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
  format!("{host}:{port}")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  env_logger::init();

  let store = match Store::open() {
    Ok(store) => store,
    Err(err) => {
      error!("failed to open store: {err}");
      std::process::exit(1);
    }
  };
  let store: Arc<dyn Storage> = Arc::new(store);
  let store = web::Data::from(store);

  let addr = listen_addr();
  info!("pathkv listening on {addr}");

  // Shutdown signals are handled by the server; dropping the last store
  // handle afterwards releases the environment and removes its directory.
  HttpServer::new(move || {
    App::new()
      .wrap(middleware::Logger::default())
      .app_data(store.clone())
      .service(get_handler)
      .service(put_handler)
      .service(delete_handler)
      .default_service(web::route().to(fallback))
  })
  .bind(&addr)?
  .run()
  .await
}
