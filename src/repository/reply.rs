use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use crate::entity::reply::{self, ActiveModel as ReplyActiveModel, Entity as ReplyEntity};

pub async fn insert<C: ConnectionTrait>(db: &C, new_reply: ReplyActiveModel) -> Result<reply::Model, DbErr> {
    new_reply.insert(db).await
}

pub async fn find_by_ticket<C: ConnectionTrait>(db: &C, ticket_id: i32) -> Result<Vec<reply::Model>, DbErr> {
    ReplyEntity::find()
        .filter(reply::Column::TicketId.eq(ticket_id))
        .order_by_asc(reply::Column::CreatedAt)
        .order_by_asc(reply::Column::Id)
        .all(db)
        .await
}
