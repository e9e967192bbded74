use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub username: String,
    pub user_id: String,
    pub status: TicketStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// 티켓 상태. DB 컬럼과 JSON 모두 같은 문자열을 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "IN_RESOLUTION")]
    InResolution,
    #[sea_orm(string_value = "RESOLVED")]
    Resolved,
}

impl TicketStatus {
    fn rank(self) -> u8 {
        match self {
            TicketStatus::Open => 0,
            TicketStatus::InResolution => 1,
            TicketStatus::Resolved => 2,
        }
    }

    /// Status never moves backward. Resolved -> Resolved is accepted so a
    /// repeated resolve simply re-persists the terminal state.
    pub fn can_transition_to(self, next: TicketStatus) -> bool {
        match (self, next) {
            (TicketStatus::Resolved, TicketStatus::Resolved) => true,
            (current, next) => next.rank() > current.rank(),
        }
    }

    /// Status a ticket moves to when an agent replies, if any.
    pub fn after_agent_reply(self) -> Option<TicketStatus> {
        match self {
            TicketStatus::Open => Some(TicketStatus::InResolution),
            TicketStatus::InResolution | TicketStatus::Resolved => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reply::Entity")]
    Reply,
}

impl Related<super::reply::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reply.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr> {
        // insert 시에는 호출자가 넣은 created_at == updated_at 을 그대로 유지
        if !insert {
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl ActiveModel {
    pub fn new_open(subject: String, description: String, username: String, user_id: String) -> Self {
        let now = Utc::now();

        Self {
            subject: Set(subject),
            description: Set(description),
            username: Set(username),
            user_id: Set(user_id),
            status: Set(TicketStatus::Open),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TicketStatus;

    #[test]
    fn status_never_moves_backward() {
        assert!(TicketStatus::Open.can_transition_to(TicketStatus::InResolution));
        assert!(TicketStatus::Open.can_transition_to(TicketStatus::Resolved));
        assert!(TicketStatus::InResolution.can_transition_to(TicketStatus::Resolved));
        assert!(TicketStatus::Resolved.can_transition_to(TicketStatus::Resolved));

        assert!(!TicketStatus::InResolution.can_transition_to(TicketStatus::Open));
        assert!(!TicketStatus::Resolved.can_transition_to(TicketStatus::InResolution));
        assert!(!TicketStatus::Resolved.can_transition_to(TicketStatus::Open));
        assert!(!TicketStatus::Open.can_transition_to(TicketStatus::Open));
    }

    #[test]
    fn only_open_tickets_advance_on_agent_reply() {
        assert_eq!(TicketStatus::Open.after_agent_reply(), Some(TicketStatus::InResolution));
        assert_eq!(TicketStatus::InResolution.after_agent_reply(), None);
        assert_eq!(TicketStatus::Resolved.after_agent_reply(), None);
    }

    #[test]
    fn status_uses_upper_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&TicketStatus::InResolution).unwrap(), "\"IN_RESOLUTION\"");
        let parsed: TicketStatus = serde_json::from_str("\"RESOLVED\"").unwrap();
        assert_eq!(parsed, TicketStatus::Resolved);
        assert!(serde_json::from_str::<TicketStatus>("1").is_err());
    }
}
