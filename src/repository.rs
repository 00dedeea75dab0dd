//! Repository layer for the benchmark schema
//!
//! Lifecycle collaborators are explicit constructor parameters, so a
//! harness that wants to measure raw statement cost swaps in the no-op
//! implementations at construction time. The no-op wiring is opt-in,
//! never the default.

use std::sync::Arc;

use sqlx::Row;

use crate::fixture::Fixture;
use crate::model::Book;

/// Hooks invoked around persistence operations.
///
/// Both methods default to the identity so implementors override only what
/// they observe.
pub trait EntityCallbacks<T>: Send + Sync {
    fn before_save(&self, entity: T) -> T {
        entity
    }

    fn after_save(&self, _entity: &T) {}
}

/// Receives repository lifecycle events.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: RepositoryEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryEvent {
    BeforeSave { id: i64 },
    AfterSave { id: i64 },
}

/// Identity callbacks: entities pass through untouched.
pub struct NoOpEntityCallbacks;

impl<T> EntityCallbacks<T> for NoOpEntityCallbacks {}

/// Discards every event.
pub struct NoOpEventPublisher;

impl EventPublisher for NoOpEventPublisher {
    fn publish(&self, _event: RepositoryEvent) {}
}

/// Default publisher: emits lifecycle events as tracing events.
pub struct TracingEventPublisher;

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, event: RepositoryEvent) {
        match event {
            RepositoryEvent::BeforeSave { id } => tracing::debug!(id, "before save"),
            RepositoryEvent::AfterSave { id } => tracing::debug!(id, "after save"),
        }
    }
}

/// CRUD operations over `books`, parameterized by lifecycle collaborators.
pub struct BookRepository {
    pool: sqlx::AnyPool,
    callbacks: Arc<dyn EntityCallbacks<Book>>,
    publisher: Arc<dyn EventPublisher>,
}

impl BookRepository {
    /// Default wiring: identity callbacks, events to tracing.
    pub fn new(fixture: &Fixture) -> Self {
        Self::with_collaborators(
            fixture,
            Arc::new(NoOpEntityCallbacks),
            Arc::new(TracingEventPublisher),
        )
    }

    /// Fully silent wiring: no callbacks, no events. For benchmarks that
    /// measure statement cost without lifecycle overhead.
    pub fn silent(fixture: &Fixture) -> Self {
        Self::with_collaborators(
            fixture,
            Arc::new(NoOpEntityCallbacks),
            Arc::new(NoOpEventPublisher),
        )
    }

    pub fn with_collaborators(
        fixture: &Fixture,
        callbacks: Arc<dyn EntityCallbacks<Book>>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            pool: fixture.pool().clone(),
            callbacks,
            publisher,
        }
    }

    /// Upsert one book, running callbacks and events around the write.
    pub async fn save(&self, book: Book) -> Result<Book, sqlx::Error> {
        let book = self.callbacks.before_save(book);
        self.publisher
            .publish(RepositoryEvent::BeforeSave { id: book.id });

        sqlx::query(
            "INSERT INTO books (id, title, pages) VALUES ($1, $2, $3) \
             ON CONFLICT(id) DO UPDATE SET title = excluded.title, pages = excluded.pages",
        )
        .bind(book.id)
        .bind(book.title.as_str())
        .bind(book.pages)
        .execute(&self.pool)
        .await?;

        self.publisher
            .publish(RepositoryEvent::AfterSave { id: book.id });
        self.callbacks.after_save(&book);
        Ok(book)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Book>, sqlx::Error> {
        let row = sqlx::query("SELECT id, title, pages FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| {
            Ok(Book {
                id: r.try_get("id")?,
                title: r.try_get("title")?,
                pages: r.try_get("pages")?,
            })
        })
        .transpose()
    }

    pub async fn find_all(&self) -> Result<Vec<Book>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, title, pages FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| {
                Ok(Book {
                    id: r.try_get("id")?,
                    title: r.try_get("title")?,
                    pages: r.try_get("pages")?,
                })
            })
            .collect()
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM books")
            .fetch_one(&self.pool)
            .await?;
        row.try_get("n")
    }

    pub async fn delete_all(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM books").execute(&self.pool).await?;
        Ok(())
    }
}
