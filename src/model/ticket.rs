use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::entity::reply::Model as ReplyModel;
use crate::entity::ticket::{Model as TicketModel, TicketStatus};
use crate::model::global_error::{AppError, ValidationFieldError};
use crate::service::{NewReply, NewTicket, TicketDetail};

pub const SUBJECT_MAX_LEN: usize = 200;
pub const USERNAME_MAX_LEN: usize = 100;
pub const USER_ID_MAX_LEN: usize = 50;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[schema(max_length = 200)]
    pub subject: String,
    pub description: String,
    #[schema(max_length = 100)]
    pub username: String,
    #[schema(max_length = 50)]
    pub user_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyRequest {
    pub message: String,
    #[schema(max_length = 100)]
    pub username: String,
    #[schema(max_length = 50)]
    pub user_id: String,
    /// 생략하면 상담원 답변으로 간주한다
    #[serde(default = "default_is_from_agent")]
    pub is_from_agent: bool,
}

fn default_is_from_agent() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: i32,
    pub subject: String,
    pub description: String,
    pub username: String,
    pub user_id: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies: Vec<ReplyResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub id: i32,
    pub ticket_id: i32,
    pub message: String,
    pub username: String,
    pub user_id: String,
    pub is_from_agent: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TicketModel> for TicketResponse {
    fn from(model: TicketModel) -> Self {
        Self {
            id: model.id,
            subject: model.subject,
            description: model.description,
            username: model.username,
            user_id: model.user_id,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            replies: Vec::new(),
        }
    }
}

impl From<TicketDetail> for TicketResponse {
    fn from(detail: TicketDetail) -> Self {
        let mut response = TicketResponse::from(detail.ticket);
        response.replies = detail.replies.into_iter().map(ReplyResponse::from).collect();
        response
    }
}

impl From<ReplyModel> for ReplyResponse {
    fn from(model: ReplyModel) -> Self {
        Self {
            id: model.id,
            ticket_id: model.ticket_id,
            message: model.message,
            username: model.username,
            user_id: model.user_id,
            is_from_agent: model.is_from_agent,
            created_at: model.created_at,
        }
    }
}

impl CreateTicketRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        check_text(&mut errors, "subject", &self.subject, Some(SUBJECT_MAX_LEN));
        check_text(&mut errors, "description", &self.description, None);
        check_text(&mut errors, "username", &self.username, Some(USERNAME_MAX_LEN));
        check_text(&mut errors, "userId", &self.user_id, Some(USER_ID_MAX_LEN));

        into_result(errors)
    }
}

impl CreateReplyRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        check_text(&mut errors, "message", &self.message, None);
        check_text(&mut errors, "username", &self.username, Some(USERNAME_MAX_LEN));
        check_text(&mut errors, "userId", &self.user_id, Some(USER_ID_MAX_LEN));

        into_result(errors)
    }
}

impl From<CreateTicketRequest> for NewTicket {
    fn from(request: CreateTicketRequest) -> Self {
        Self {
            subject: request.subject,
            description: request.description,
            username: request.username,
            user_id: request.user_id,
        }
    }
}

impl From<CreateReplyRequest> for NewReply {
    fn from(request: CreateReplyRequest) -> Self {
        Self {
            message: request.message,
            username: request.username,
            user_id: request.user_id,
            is_from_agent: request.is_from_agent,
        }
    }
}

fn check_text(errors: &mut Vec<ValidationFieldError>, field: &str, value: &str, max_len: Option<usize>) {
    if value.trim().is_empty() {
        errors.push(ValidationFieldError {
            field: field.to_string(),
            message: format!("{field} 값은 필수입니다."),
        });
        return;
    }

    if let Some(max_len) = max_len {
        if value.chars().count() > max_len {
            errors.push(ValidationFieldError {
                field: field.to_string(),
                message: format!("{field} 값은 최대 {max_len}자까지 입력할 수 있습니다."),
            });
        }
    }
}

fn into_result(errors: Vec<ValidationFieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError(errors))
    }
}
