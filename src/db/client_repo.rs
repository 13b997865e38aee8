// src/db/client_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::client::Client};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_client<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        full_name: &str,
        phone: &str,
        email: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (branch_id, full_name, phone, email, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, branch_id, full_name, phone, email, notes, created_at, updated_at
            "#,
        )
        .bind(branch_id)
        .bind(full_name)
        .bind(phone)
        .bind(email)
        .bind(notes)
        .fetch_one(executor)
        .await?;

        Ok(client)
    }

    // A busca da tela de clientes: nome OU telefone, sem case
    pub async fn get_all_clients<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let clients = match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Client>(
                    r#"
                    SELECT * FROM clients
                    WHERE branch_id = $1
                      AND (full_name ILIKE $2 OR phone ILIKE $2)
                    ORDER BY full_name ASC
                    "#,
                )
                .bind(branch_id)
                .bind(pattern)
                .fetch_all(executor)
                .await?
            }
            None => {
                sqlx::query_as::<_, Client>(
                    "SELECT * FROM clients WHERE branch_id = $1 ORDER BY full_name ASC",
                )
                .bind(branch_id)
                .fetch_all(executor)
                .await?
            }
        };

        Ok(clients)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        client_id: Uuid,
    ) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE id = $1 AND branch_id = $2",
        )
        .bind(client_id)
        .bind(branch_id)
        .fetch_optional(executor)
        .await?;

        Ok(client)
    }

    pub async fn update_client<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        client_id: Uuid,
        full_name: &str,
        phone: &str,
        email: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET full_name = $3, phone = $4, email = $5, notes = $6, updated_at = now()
            WHERE id = $1 AND branch_id = $2
            RETURNING id, branch_id, full_name, phone, email, notes, created_at, updated_at
            "#,
        )
        .bind(client_id)
        .bind(branch_id)
        .bind(full_name)
        .bind(phone)
        .bind(email)
        .bind(notes)
        .fetch_optional(executor)
        .await?;

        Ok(client)
    }

    pub async fn delete_client<'e, E>(
        &self,
        executor: E,
        branch_id: Uuid,
        client_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND branch_id = $2")
            .bind(client_id)
            .bind(branch_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
