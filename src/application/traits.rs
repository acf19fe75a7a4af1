//! Application層の抽象化トレイト定義
//! 外部依存を抽象化し、テスト可能な構造を提供します

use async_trait::async_trait;
use chrono::NaiveDate;

/// 解答取得の抽象化
#[async_trait]
pub trait SolutionFetcher: Send + Sync {
    /// 指定日の解答（大文字）を 1 回だけ取得。失敗は理由を問わず `None`
    async fn fetch(&self, date: NaiveDate) -> Option<String>;
}
