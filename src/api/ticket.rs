use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use crate::model::global_error::{AppError, ErrorCode};
use crate::model::ticket::{CreateReplyRequest, CreateTicketRequest, ReplyResponse, TicketResponse};
use crate::service::TicketService;

#[utoipa::path(
    get,
    path = "/api/tickets",
    summary = "미해결 티켓 목록 조회",
    responses(
        (status = 200, description = "Resolved 가 아닌 티켓, 최신 순", body = Vec<TicketResponse>),
        (status = 500, description = "서버 오류", body = String, content_type = "text/plain"),
    ),
    tag = "tickets",
)]
#[get("/tickets")]
pub async fn list_tickets(
    service: web::Data<TicketService>,
) -> Result<HttpResponse, AppError> {
    let tickets = service.list_unresolved().await?;

    let response: Vec<TicketResponse> = tickets
        .into_iter()
        .map(TicketResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    summary = "티켓 상세 조회 (답변 포함)",
    params(
        ("id" = i32, Path, description = "티켓 ID", example = 1),
    ),
    responses(
        (status = 200, description = "티켓과 답변 목록", body = TicketResponse),
        (status = 404, description = "티켓 없음", body = String, content_type = "text/plain"),
    ),
    tag = "tickets",
)]
#[get("/tickets/{id}")]
pub async fn get_ticket(
    service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let ticket_id = path.into_inner();

    let detail = service
        .get_by_id(ticket_id)
        .await?
        .ok_or_else(|| not_found(ticket_id))?;

    Ok(HttpResponse::Ok().json(TicketResponse::from(detail)))
}

#[utoipa::path(
    post,
    path = "/api/tickets",
    summary = "티켓 생성",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "티켓 생성 성공", body = TicketResponse),
        (status = 400, description = "입력값 오류"),
    ),
    tag = "tickets",
)]
#[post("/tickets")]
pub async fn create_ticket(
    service: web::Data<TicketService>,
    body: web::Json<CreateTicketRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate()?;

    let ticket = service.create(request.into()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, ticket_location(ticket.id)))
        .json(TicketResponse::from(ticket)))
}

#[utoipa::path(
    post,
    path = "/api/tickets/{id}/resolve",
    summary = "티켓 해결 처리",
    params(
        ("id" = i32, Path, description = "티켓 ID", example = 1),
    ),
    responses(
        (status = 200, description = "해결 처리된 티켓", body = TicketResponse),
        (status = 404, description = "티켓 없음", body = String, content_type = "text/plain"),
    ),
    tag = "tickets",
)]
#[post("/tickets/{id}/resolve")]
pub async fn resolve_ticket(
    service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let ticket = service.resolve(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(TicketResponse::from(ticket)))
}

#[utoipa::path(
    post,
    path = "/api/tickets/{id}/replies",
    summary = "티켓에 답변 추가",
    params(
        ("id" = i32, Path, description = "티켓 ID", example = 1),
    ),
    request_body = CreateReplyRequest,
    responses(
        (status = 201, description = "답변 생성 성공", body = ReplyResponse),
        (status = 400, description = "입력값 오류"),
        (status = 404, description = "티켓 없음", body = String, content_type = "text/plain"),
    ),
    tag = "tickets",
)]
#[post("/tickets/{id}/replies")]
pub async fn add_reply(
    service: web::Data<TicketService>,
    path: web::Path<i32>,
    body: web::Json<CreateReplyRequest>,
) -> Result<HttpResponse, AppError> {
    let ticket_id = path.into_inner();
    let request = body.into_inner();
    request.validate()?;

    let reply = service.add_reply(ticket_id, request.into()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, ticket_location(reply.ticket_id)))
        .json(ReplyResponse::from(reply)))
}

fn ticket_location(ticket_id: i32) -> String {
    format!("/api/tickets/{}", ticket_id)
}

fn not_found(ticket_id: i32) -> AppError {
    AppError::not_found(ErrorCode::TicketNotFound, format!("Ticket with ID {} not found", ticket_id))
}
