//! Benchmark row types

/// Immutable projection of one row of the `books` table.
///
/// Compared field-for-field; two books mapped from equal rows are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub pages: i32,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, pages: i32) -> Self {
        Self {
            id,
            title: title.into(),
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn books_compare_field_for_field() {
        let a = Book::new(1, "Design Patterns", 395);
        let b = Book {
            id: 1,
            title: "Design Patterns".to_string(),
            pages: 395,
        };
        assert_eq!(a, b);
        assert_ne!(a, Book::new(1, "Design Patterns", 396));
    }
}
