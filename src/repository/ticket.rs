use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use crate::entity::reply;
use crate::entity::ticket::{self, ActiveModel as TicketActiveModel, Entity as TicketEntity, TicketStatus};

/// 미해결 티켓, 최신 순.
pub async fn find_unresolved<C: ConnectionTrait>(db: &C) -> Result<Vec<ticket::Model>, DbErr> {
    TicketEntity::find()
        .filter(ticket::Column::Status.ne(TicketStatus::Resolved))
        .order_by_desc(ticket::Column::CreatedAt)
        .order_by_desc(ticket::Column::Id)
        .all(db)
        .await
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<ticket::Model>, DbErr> {
    TicketEntity::find_by_id(id).one(db).await
}

/// 티켓과 답변 목록(작성 순)을 함께 조회한다.
pub async fn find_with_replies<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<(ticket::Model, Vec<reply::Model>)>, DbErr> {
    let Some(ticket) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    let replies = super::reply::find_by_ticket(db, ticket.id).await?;

    Ok(Some((ticket, replies)))
}

pub async fn insert<C: ConnectionTrait>(db: &C, new_ticket: TicketActiveModel) -> Result<ticket::Model, DbErr> {
    new_ticket.insert(db).await
}

/// 상태를 바꿔 저장한다. updated_at 은 엔티티 save hook 에서 갱신된다.
/// 역방향 전이(예: Resolved -> Open)는 쓰기 전에 거부한다.
pub async fn update_status<C: ConnectionTrait>(
    db: &C,
    ticket: ticket::Model,
    status: TicketStatus,
) -> Result<ticket::Model, DbErr> {
    if !ticket.status.can_transition_to(status) {
        return Err(DbErr::Custom(format!(
            "티켓 {} 상태를 {:?} 에서 {:?} 로 되돌릴 수 없습니다",
            ticket.id, ticket.status, status
        )));
    }

    let mut ticket_model: TicketActiveModel = ticket.into();
    ticket_model.status = Set(status);
    ticket_model.update(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_db;
    use crate::entity::reply::ActiveModel as ReplyActiveModel;
    use crate::repository::reply as reply_repository;
    use chrono::{Duration, TimeZone, Utc};

    fn ticket_at(subject: &str, status: TicketStatus, minutes: i64) -> TicketActiveModel {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes);
        TicketActiveModel {
            subject: Set(subject.to_string()),
            description: Set("desc".to_string()),
            username: Set("alice".to_string()),
            user_id: Set("u1".to_string()),
            status: Set(status),
            created_at: Set(created),
            updated_at: Set(created),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn unresolved_tickets_are_newest_first_without_resolved() {
        let db = test_db().await;

        insert(&db, ticket_at("oldest", TicketStatus::Open, 0)).await.unwrap();
        insert(&db, ticket_at("done", TicketStatus::Resolved, 5)).await.unwrap();
        insert(&db, ticket_at("newest", TicketStatus::InResolution, 10)).await.unwrap();
        insert(&db, ticket_at("middle", TicketStatus::Open, 3)).await.unwrap();

        let subjects: Vec<String> = find_unresolved(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.subject)
            .collect();

        assert_eq!(subjects, vec!["newest", "middle", "oldest"]);
    }

    #[actix_web::test]
    async fn replies_come_back_oldest_first() {
        let db = test_db().await;
        let ticket = insert(&db, ticket_at("thread", TicketStatus::Open, 0)).await.unwrap();
        let base = Utc.with_ymd_and_hms(2025, 1, 2, 9, 0, 0).unwrap();

        for (message, offset) in [("second", 2), ("first", 1), ("third", 3)] {
            let mut reply = ReplyActiveModel::new_for_ticket(
                ticket.id,
                message.to_string(),
                "agent".to_string(),
                "a1".to_string(),
                true,
            );
            reply.created_at = Set(base + Duration::minutes(offset));
            reply_repository::insert(&db, reply).await.unwrap();
        }

        let (found, replies) = find_with_replies(&db, ticket.id).await.unwrap().unwrap();
        let messages: Vec<&str> = replies.iter().map(|r| r.message.as_str()).collect();

        assert_eq!(found.id, ticket.id);
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[actix_web::test]
    async fn missing_ticket_is_none() {
        let db = test_db().await;
        assert!(find_with_replies(&db, 42).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn status_update_refreshes_updated_at() {
        let db = test_db().await;
        let ticket = insert(&db, ticket_at("touch", TicketStatus::Open, 0)).await.unwrap();

        let updated = update_status(&db, ticket.clone(), TicketStatus::InResolution).await.unwrap();

        assert_eq!(updated.status, TicketStatus::InResolution);
        assert_eq!(updated.created_at, ticket.created_at);
        assert!(updated.updated_at > ticket.updated_at);
    }

    #[actix_web::test]
    async fn backward_status_moves_are_rejected_without_writing() {
        let db = test_db().await;
        let ticket = insert(&db, ticket_at("closed", TicketStatus::Resolved, 0)).await.unwrap();

        let err = update_status(&db, ticket.clone(), TicketStatus::Open).await.unwrap_err();
        assert!(matches!(err, DbErr::Custom(_)));
        assert!(update_status(&db, ticket.clone(), TicketStatus::InResolution).await.is_err());

        let in_resolution = insert(&db, ticket_at("working", TicketStatus::InResolution, 1)).await.unwrap();
        assert!(update_status(&db, in_resolution.clone(), TicketStatus::Open).await.is_err());

        assert_eq!(find_by_id(&db, ticket.id).await.unwrap().unwrap(), ticket);
        assert_eq!(find_by_id(&db, in_resolution.id).await.unwrap().unwrap(), in_resolution);
    }

    #[actix_web::test]
    async fn deleting_a_ticket_removes_its_replies() {
        let db = test_db().await;
        let ticket = insert(&db, ticket_at("cascade", TicketStatus::Open, 0)).await.unwrap();
        let reply = ReplyActiveModel::new_for_ticket(
            ticket.id,
            "hello".to_string(),
            "alice".to_string(),
            "u1".to_string(),
            false,
        );
        reply_repository::insert(&db, reply).await.unwrap();

        TicketEntity::delete_by_id(ticket.id).exec(&db).await.unwrap();

        let orphans = reply_repository::find_by_ticket(&db, ticket.id).await.unwrap();
        assert!(orphans.is_empty());
    }
}
