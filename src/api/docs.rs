use actix_web::{get, HttpResponse};
use utoipa::OpenApi;
use crate::entity::ticket::TicketStatus;
use crate::model::global_error::{ErrorResponse, ValidationFieldError};
use crate::model::ticket::{CreateReplyRequest, CreateTicketRequest, ReplyResponse, TicketResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Support Desk API", description = "고객 지원 티켓 API"),
    paths(
        super::health::health_check,
        super::ticket::list_tickets,
        super::ticket::get_ticket,
        super::ticket::create_ticket,
        super::ticket::resolve_ticket,
        super::ticket::add_reply,
    ),
    components(schemas(
        TicketStatus,
        TicketResponse,
        ReplyResponse,
        CreateTicketRequest,
        CreateReplyRequest,
        ErrorResponse,
        ValidationFieldError,
    )),
    tags(
        (name = "tickets", description = "티켓/답변"),
        (name = "health check", description = "상태 확인"),
    ),
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
