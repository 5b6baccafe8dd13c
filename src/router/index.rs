use crate::comment::index::comment_routes;
use crate::comment::service::CommentStore;
use crate::config::AppConfig;
use crate::middleware::error_handler::json_error_handler;
use crate::middleware::not_found::not_found;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;
use std::sync::Arc;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the comments API",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
    }))
}

pub fn routes(cfg: &mut web::ServiceConfig, store: Arc<dyn CommentStore>, config: AppConfig) {
    let read_access = config.read_access;

    cfg.app_data(web::Data::from(store))
        .app_data(web::Data::new(config))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(default)
        .configure(|cfg| comment_routes(cfg, read_access))
        .default_service(web::to(not_found));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::memory::InMemoryCommentStore;
    use crate::config::RouteAccess;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn serves_banner_and_json_404() {
        let store: Arc<dyn CommentStore> = Arc::new(InMemoryCommentStore::new());
        let app = test::init_service(App::new().configure(move |cfg| {
            routes(cfg, store, AppConfig::test_config(RouteAccess::Public))
        }))
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/nothing").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Route does not exist");
    }
}
