use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "replies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub ticket_id: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub username: String,
    pub user_id: String,
    pub is_from_agent: bool,
    #[sea_orm(indexed)]
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ticket::Entity",
        from = "Column::TicketId",
        to = "super::ticket::Column::Id",
        on_delete = "Cascade"
    )]
    Ticket,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

// 답변은 생성 이후 수정하지 않는다
impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new_for_ticket(
        ticket_id: i32,
        message: String,
        username: String,
        user_id: String,
        is_from_agent: bool,
    ) -> Self {
        Self {
            ticket_id: Set(ticket_id),
            message: Set(message),
            username: Set(username),
            user_id: Set(user_id),
            is_from_agent: Set(is_from_agent),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
    }
}
