use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;
use crate::entity::{reply, ticket};

#[derive(DeriveMigrationName)]
pub struct Migration;

impl Migration {
    async fn create_from_entity<E: EntityTrait + Copy>(manager: &SchemaManager<'_>, schema: &Schema, entity: E) -> Result<(), DbErr> {
        manager
            .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
            .await?;

        // #[sea_orm(indexed)] 컬럼 인덱스
        for mut index in schema.create_index_from_entity(entity) {
            manager.create_index(index.if_not_exists().to_owned()).await?;
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // replies.ticket_id FK (ON DELETE CASCADE) 는 reply relation 에서 생성되므로 tickets 가 먼저
        Self::create_from_entity(manager, &schema, ticket::Entity).await?;
        Self::create_from_entity(manager, &schema, reply::Entity).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(reply::Entity).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ticket::Entity).if_exists().to_owned())
            .await
    }
}
