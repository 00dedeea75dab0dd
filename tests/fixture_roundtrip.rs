//! End-to-end fixture tests against the shipped profile configs.
//!
//! The embedded profiles run self-contained. The postgres tests require a
//! reachable server and are ignored by default.

use anyhow::Result;

use relbench::{Book, BookRepository, Fixture, FixtureError, Profile};

#[tokio::test]
async fn embedded_in_memory_profile_round_trips_books() -> Result<()> {
    let fixture = Fixture::connect("h2-in-memory").await?;
    assert_eq!(fixture.profile(), Profile::EmbeddedInMemory);

    let repo = BookRepository::new(&fixture);
    repo.save(Book::new(1, "Design Patterns", 395)).await?;
    repo.save(Book::new(2, "Refactoring", 448)).await?;

    let row = sqlx::query("SELECT id, title, pages FROM books WHERE id = $1")
        .bind(1i64)
        .fetch_one(fixture.pool())
        .await?;
    let book = (fixture.book_mapper())(&row)?;
    assert_eq!(book, Book::new(1, "Design Patterns", 395));

    let all = repo.find_all().await?;
    assert_eq!(
        all,
        vec![
            Book::new(1, "Design Patterns", 395),
            Book::new(2, "Refactoring", 448),
        ]
    );

    fixture.close().await;
    Ok(())
}

#[tokio::test]
async fn unknown_profile_is_rejected_eagerly() {
    let err = Fixture::connect("mariadb").await.unwrap_err();
    assert!(matches!(err, FixtureError::UnknownProfile(ref name) if name == "mariadb"));
}

#[tokio::test]
async fn fixture_closes_on_failure_paths_too() -> Result<()> {
    let fixture = Fixture::connect("h2-in-memory").await?;
    let repo = BookRepository::new(&fixture);

    // A failing statement must not poison shutdown.
    let bad = sqlx::query("SELECT nope FROM books").fetch_one(fixture.pool()).await;
    assert!(bad.is_err());

    repo.save(Book::new(9, "Working Effectively with Legacy Code", 456))
        .await?;
    assert_eq!(repo.count().await?, 1);

    fixture.close().await;
    fixture.close().await; // idempotent
    Ok(())
}

// The postgres tests need a running server, e.g.:
//   docker run -e POSTGRES_USER=relbench -e POSTGRES_PASSWORD=relbench \
//     -e POSTGRES_DB=relbench -p 5432:5432 postgres

#[tokio::test]
#[ignore] // Requires PostgreSQL running
async fn postgres_profile_connects_and_round_trips() -> Result<()> {
    let fixture = Fixture::connect("postgres").await?;
    assert_eq!(fixture.profile(), Profile::Postgres);
    fixture.health_check().await?;

    let repo = BookRepository::new(&fixture);
    repo.delete_all().await?;
    repo.save(Book::new(1, "Design Patterns", 395)).await?;

    let found = repo.find_by_id(1).await?;
    assert_eq!(found, Some(Book::new(1, "Design Patterns", 395)));

    repo.delete_all().await?;
    fixture.close().await;
    Ok(())
}
