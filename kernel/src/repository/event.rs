use crate::model::{
    catalog::{event::CreateEvent, Event},
    id::EventId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId>;
    // 作成順にすべてのイベントを取得する
    async fn find_all(&self) -> AppResult<Vec<Event>>;
}
