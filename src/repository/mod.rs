//! 티켓/답변 테이블 접근 함수 모음.
//!
//! 모든 함수는 커넥션을 인자로 받는다. 풀(`DatabaseConnection`)과
//! 트랜잭션(`DatabaseTransaction`) 어느 쪽이든 넘길 수 있다.

pub mod reply;
pub mod ticket;

use sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};

/// 여러 쓰기를 하나의 작업 단위로 묶는다.
pub async fn begin<C: TransactionTrait>(db: &C) -> Result<DatabaseTransaction, DbErr> {
    db.begin().await
}

pub async fn commit(txn: DatabaseTransaction) -> Result<(), DbErr> {
    txn.commit().await
}

pub async fn rollback(txn: DatabaseTransaction) -> Result<(), DbErr> {
    txn.rollback().await
}
