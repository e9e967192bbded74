pub use sea_orm_migration::prelude::*;

mod m20251017_000001_create_ticket_tables;

/// 애플리케이션 시작 시 실행되어 스키마가 없으면 만든다.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251017_000001_create_ticket_tables::Migration)]
    }
}
