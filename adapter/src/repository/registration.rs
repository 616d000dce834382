use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::Enrollment,
    registration::{event::CreateRegistration, Registration},
};
use kernel::repository::registration::RegistrationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::registration::RegistrationRow, ConnectionPool};

#[derive(new)]
pub struct RegistrationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    async fn create(&self, event: CreateRegistration) -> AppResult<()> {
        // (enrollment, event_name) の主キーで重複を弾くため、
        // 同時に登録されても二重に記録されることはない
        let res = sqlx::query(
            r#"
                INSERT INTO registrations
                (enrollment, event_name, event_date, event_description,
                department, time, location, is_paid, event_pic, registered_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (enrollment, event_name) DO NOTHING
            "#,
        )
        .bind(&event.enrollment)
        .bind(&event.event_name)
        .bind(&event.event_date)
        .bind(&event.event_description)
        .bind(&event.department)
        .bind(&event.time)
        .bind(&event.location)
        .bind(&event.is_paid)
        .bind(&event.event_pic)
        .bind(event.registered_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::Conflict(
                "You are already registered for this event!".into(),
            ));
        }

        Ok(())
    }

    async fn find_by_enrollment(&self, enrollment: &Enrollment) -> AppResult<Vec<Registration>> {
        sqlx::query_as::<_, RegistrationRow>(
            r#"
                SELECT
                enrollment,
                event_name,
                event_date,
                event_description,
                department,
                time,
                location,
                is_paid,
                event_pic,
                registered_at
                FROM registrations
                WHERE enrollment = $1
                ORDER BY registered_at ASC
            "#,
        )
        .bind(enrollment)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Registration::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
