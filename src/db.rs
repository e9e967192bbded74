use sea_orm::{Database, DatabaseConnection};
use tracing::{info, instrument};
use sea_orm::ConnectOptions;
use std::time::Duration;
use crate::configuration::DatabaseSettings;
use crate::migration::{Migrator, MigratorTrait};

#[instrument(skip(settings))]
pub async fn init_db(settings: &DatabaseSettings) -> anyhow::Result<DatabaseConnection> {
    info!("데이터베이스 연결 설정 중...");

    let mut options = ConnectOptions::new(settings.url.clone());
    options
        .max_connections(settings.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    info!("데이터베이스에 연결 시도 중...");
    let db = Database::connect(options).await?;
    info!("데이터베이스 연결 완료");

    info!("스키마 생성 중...");
    Migrator::up(&db, None).await?;
    info!("스키마 준비 완료");

    Ok(db)
}

/// 테스트용 in-memory SQLite. 커넥션을 하나로 고정해야 같은 DB 를 본다.
#[cfg(test)]
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.expect("in-memory sqlite 연결 실패");
    Migrator::up(&db, None).await.expect("마이그레이션 실패");
    db
}
