use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::{self, Data, ServiceConfig};
use actix_web::{App, HttpServer};
use sea_orm::DatabaseConnection;
use tracing::info;
use crate::api;
use crate::configuration::Settings;
use crate::db::init_db;
use crate::model::global_error::{AppError, ErrorCode};
use crate::service::TicketService;

/// 라우트와 공유 데이터를 등록한다. 서버와 테스트가 같은 구성을 쓴다.
pub fn configure_app(cfg: &mut ServiceConfig, db: DatabaseConnection) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("요청 본문 파싱 실패: {}", err);
        AppError::with_detail(ErrorCode::InvalidJsonBody, err.to_string()).into()
    });

    cfg.app_data(Data::new(TicketService::new(db)))
        .app_data(json_config)
        .service(api::health_check)
        .service(api::openapi_json)
        .service(
            web::scope("/api")
                .service(api::list_tickets)
                .service(api::get_ticket)
                .service(api::create_ticket)
                .service(api::resolve_ticket)
                .service(api::add_reply),
        );
}

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}

pub async fn build(settings: Settings) -> anyhow::Result<Server> {
    let db = init_db(&settings.database).await?;

    let address = settings.application.address();
    let allowed_origins = settings.allowed_origins.clone();

    info!("서버 시작 중: http://{}:{}", address.0, address.1);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(Logger::default())
            .configure(|cfg| configure_app(cfg, db.clone()))
    })
        .bind(address)?
        .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::{test, App};
    use crate::db::test_db;
    use super::{configure_app, cors};

    #[actix_web::test]
    async fn cors_preflight_allows_configured_origin_only() {
        let db = test_db().await;
        let origins = vec!["http://localhost:5173".to_string()];
        let app = test::init_service(
            App::new()
                .wrap(cors(&origins))
                .configure(|cfg| configure_app(cfg, db)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/tickets")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/tickets")
            .insert_header((header::ORIGIN, "http://evil.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[actix_web::test]
    async fn openapi_document_is_served() {
        let db = test_db().await;
        let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, db))).await;

        let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
        let doc: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(doc["paths"]["/api/tickets/{id}/replies"]["post"].is_object());
    }
}
