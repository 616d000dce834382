use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    catalog::{event::CreateEvent, Event},
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;

use crate::database::{model::event::EventRow, ConnectionPool};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let event_id = EventId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO events (event_id, fields, event_pic, created_by)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(event_id)
        .bind(Json(&event.fields))
        .bind(&event.event_pic)
        .bind(&event.created_by)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been created".into(),
            ));
        }

        Ok(event_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, EventRow>(
            r#"
                SELECT event_id, fields, event_pic, created_by, created_at
                FROM events
                ORDER BY created_at ASC, event_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Event::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
