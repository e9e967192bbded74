use anyhow::Context;
use support_desk::configuration::get_configuration;
use support_desk::startup::build;
use support_desk::telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = get_configuration().context("설정 로드 실패")?;

    let subscriber = get_subscriber(
        "support_desk".into(),
        settings.log_filter.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber)?;

    info!("애플리케이션 시작 중...");

    let server = build(settings).await?;
    server.await?;

    Ok(())
}
