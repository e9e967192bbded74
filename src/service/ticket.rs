use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr};
use thiserror::Error;
use tracing::{info, instrument, warn};
use crate::entity::reply::{self, ActiveModel as ReplyActiveModel};
use crate::entity::ticket::{self, ActiveModel as TicketActiveModel, TicketStatus};
use crate::repository;
use crate::repository::reply as reply_repository;
use crate::repository::ticket as ticket_repository;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Ticket with ID {0} not found")]
    TicketNotFound(i32),

    #[error(transparent)]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub subject: String,
    pub description: String,
    pub username: String,
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct NewReply {
    pub message: String,
    pub username: String,
    pub user_id: String,
    pub is_from_agent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketDetail {
    pub ticket: ticket::Model,
    pub replies: Vec<reply::Model>,
}

/// 티켓 생성/답변/해결 비즈니스 규칙.
///
/// 입력 검증은 HTTP 계층에서 끝난 상태로 들어온다고 가정한다.
#[derive(Debug, Clone)]
pub struct TicketService {
    db: DatabaseConnection,
}

impl TicketService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list_unresolved(&self) -> Result<Vec<ticket::Model>, ServiceError> {
        Ok(ticket_repository::find_unresolved(&self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<TicketDetail>, ServiceError> {
        let detail = ticket_repository::find_with_replies(&self.db, id)
            .await?
            .map(|(ticket, replies)| TicketDetail { ticket, replies });

        Ok(detail)
    }

    #[instrument(skip(self, new_ticket), fields(user_id = %new_ticket.user_id))]
    pub async fn create(&self, new_ticket: NewTicket) -> Result<ticket::Model, ServiceError> {
        let NewTicket { subject, description, username, user_id } = new_ticket;
        let model = TicketActiveModel::new_open(subject, description, username, user_id);

        let created = ticket_repository::insert(&self.db, model).await?;
        info!(ticket_id = created.id, "티켓 생성 완료");

        Ok(created)
    }

    /// 이미 해결된 티켓도 다시 Resolved 로 저장한다.
    #[instrument(skip(self))]
    pub async fn resolve(&self, ticket_id: i32) -> Result<ticket::Model, ServiceError> {
        let ticket = ticket_repository::find_by_id(&self.db, ticket_id)
            .await?
            .ok_or(ServiceError::TicketNotFound(ticket_id))?;

        let resolved = ticket_repository::update_status(&self.db, ticket, TicketStatus::Resolved).await?;
        info!(ticket_id, "티켓 해결 처리 완료");

        Ok(resolved)
    }

    /// 상담원 답변이 Open 티켓에 달리면 InResolution 으로 전환한다.
    /// 상태 변경과 답변 저장은 하나의 트랜잭션에서 수행된다.
    #[instrument(skip(self, new_reply), fields(is_from_agent = new_reply.is_from_agent))]
    pub async fn add_reply(&self, ticket_id: i32, new_reply: NewReply) -> Result<reply::Model, ServiceError> {
        let txn = repository::begin(&self.db).await?;

        match record_reply(&txn, ticket_id, new_reply).await {
            Ok(created) => {
                repository::commit(txn).await?;
                Ok(created)
            }
            Err(err) => {
                if let Err(rollback_err) = repository::rollback(txn).await {
                    warn!(ticket_id, error = %rollback_err, "트랜잭션 롤백 실패");
                }
                Err(err)
            }
        }
    }
}

async fn record_reply(
    txn: &DatabaseTransaction,
    ticket_id: i32,
    new_reply: NewReply,
) -> Result<reply::Model, ServiceError> {
    let ticket = ticket_repository::find_by_id(txn, ticket_id)
        .await?
        .ok_or(ServiceError::TicketNotFound(ticket_id))?;

    if new_reply.is_from_agent {
        if let Some(next) = ticket.status.after_agent_reply() {
            let previous = ticket.status;
            ticket_repository::update_status(txn, ticket, next).await?;
            info!(ticket_id, ?previous, ?next, "상담원 답변으로 티켓 상태 변경");
        }
    }

    let NewReply { message, username, user_id, is_from_agent } = new_reply;
    let model = ReplyActiveModel::new_for_ticket(ticket_id, message, username, user_id, is_from_agent);

    Ok(reply_repository::insert(txn, model).await?)
}
