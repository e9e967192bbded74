use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use std::fmt;
use utoipa::ToSchema;
use crate::service::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 400 BAD REQUEST
    ValidationError,
    InvalidJsonBody,

    // 404 NOT FOUND
    TicketNotFound,

    // 500 SERVER ERRORS
    DatabaseError,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "유효성 검증에 실패했습니다",
            ErrorCode::InvalidJsonBody => "요청 본문 형식이 올바르지 않습니다",

            ErrorCode::TicketNotFound => "티켓을 찾을 수 없습니다",

            ErrorCode::DatabaseError => "데이터베이스 오류가 발생했습니다",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationError |
            ErrorCode::InvalidJsonBody => StatusCode::BAD_REQUEST,

            ErrorCode::TicketNotFound => StatusCode::NOT_FOUND,

            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ApiError(ErrorCode, Option<String>),

    #[error("validation failed")]
    ValidationError(Vec<ValidationFieldError>),
}

impl AppError {
    pub fn new(code: ErrorCode) -> Self {
        AppError::ApiError(code, None)
    }

    pub fn with_detail(code: ErrorCode, detail: String) -> Self {
        AppError::ApiError(code, Some(detail))
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::with_detail(code, detail)
    }

    pub fn internal_error(code: ErrorCode) -> Self {
        Self::new(code)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ApiError(code, _) => *code,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ValidationFieldError>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.code().status_code()
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationError(errors) => {
                let code = ErrorCode::ValidationError;
                HttpResponse::build(code.status_code()).json(ErrorResponse {
                    code: format!("{:?}", code),
                    message: code.message().to_string(),
                    detail: None,
                    errors: errors.clone(),
                })
            }
            AppError::ApiError(code, detail) if code.status_code() == StatusCode::BAD_REQUEST => {
                HttpResponse::build(code.status_code()).json(ErrorResponse {
                    code: format!("{:?}", code),
                    message: code.message().to_string(),
                    detail: detail.clone(),
                    errors: Vec::new(),
                })
            }
            // 404 는 사람이 읽을 문구만, 500 은 내부 정보 없이 고정 문구만 내려준다
            AppError::ApiError(code, detail) => {
                let body = match (code.status_code(), detail) {
                    (StatusCode::NOT_FOUND, Some(detail)) => detail.clone(),
                    _ => code.message().to_string(),
                };

                HttpResponse::build(code.status_code())
                    .content_type(ContentType::plaintext())
                    .body(body)
            }
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        log::error!("데이터베이스 오류 발생: {}", err);
        AppError::internal_error(ErrorCode::DatabaseError)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::TicketNotFound(_) => AppError::not_found(ErrorCode::TicketNotFound, err.to_string()),
            ServiceError::Database(db_err) => db_err.into(),
        }
    }
}
