//! Student directory business logic.
//!
//! Receipts read a student's name at issuance time; everything else here keeps
//! the directory itself usable (register, list, search, remove).

use crate::{
    cache::{CacheKey, CachedValue, QueryCache},
    entities::{Student, student},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Fields accepted when registering a student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    /// Full name (required)
    pub name: String,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// School grade
    pub grade: Option<String>,
    /// Parent or guardian name
    pub responsible_name: Option<String>,
    /// Parent or guardian phone
    pub responsible_phone: Option<String>,
}

impl NewStudent {
    /// Registration with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Registers a new student and invalidates the cached student listing.
///
/// # Errors
/// Returns an error if the name is blank or the insert fails.
#[instrument(skip(db, cache, new_student), fields(name = %new_student.name))]
pub async fn create_student(
    db: &DatabaseConnection,
    cache: &QueryCache,
    new_student: NewStudent,
) -> Result<student::Model> {
    let name = new_student.name.trim().to_string();
    if name.is_empty() {
        return Err(Error::InvalidField {
            field: "name",
            reason: "student name cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let model = student::ActiveModel {
        name: Set(name),
        email: Set(non_blank(new_student.email)),
        phone: Set(non_blank(new_student.phone)),
        grade: Set(non_blank(new_student.grade)),
        responsible_name: Set(non_blank(new_student.responsible_name)),
        responsible_phone: Set(non_blank(new_student.responsible_phone)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let stored = model.insert(db).await?;

    cache.invalidate(CacheKey::Students).await;
    info!("Registered student {} ({})", stored.id, stored.name);
    Ok(stored)
}

/// All students, newest first. Served from the cache when populated.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_students(
    db: &DatabaseConnection,
    cache: &QueryCache,
) -> Result<Vec<student::Model>> {
    if let Some(students) = cache.students().await {
        return Ok(students);
    }

    let students = Student::find()
        .order_by_desc(student::Column::CreatedAt)
        .order_by_desc(student::Column::Id)
        .all(db)
        .await?;
    cache
        .set(CacheKey::Students, CachedValue::Students(students.clone()))
        .await;
    Ok(students)
}

/// Looks up a student by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_student_by_id(
    db: &DatabaseConnection,
    student_id: i64,
) -> Result<Option<student::Model>> {
    Student::find_by_id(student_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Students whose name contains `partial`, alphabetically. Used for autocomplete.
///
/// Matching is case-insensitive for accented letters too, and `%` or `_` in
/// `partial` match only themselves.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn find_students_by_name(
    db: &DatabaseConnection,
    partial: &str,
) -> Result<Vec<student::Model>> {
    let needle = partial.trim().to_lowercase();
    let students = Student::find()
        .order_by_asc(student::Column::Name)
        .all(db)
        .await?;
    Ok(students
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect())
}

/// Removes a student. Receipts keep their copied name and lose the reference.
///
/// # Errors
/// Returns [`Error::StudentNotFound`] if no such student exists, or a database error.
#[instrument(skip(db, cache))]
pub async fn delete_student(
    db: &DatabaseConnection,
    cache: &QueryCache,
    student_id: i64,
) -> Result<()> {
    let student = get_student_by_id(db, student_id)
        .await?
        .ok_or(Error::StudentNotFound { id: student_id })?;

    student.delete(db).await?;
    cache.invalidate(CacheKey::Students).await;
    info!("Deleted student {student_id}");
    Ok(())
}

/// Name to copy onto a receipt.
///
/// With a `student_id` the directory's current name wins over what was typed,
/// and an unknown id is an error. Without one the typed name is used as-is.
///
/// # Errors
/// Returns [`Error::StudentNotFound`] for an unknown id, or a database error.
pub async fn resolve_student_name(
    db: &DatabaseConnection,
    student_id: Option<i64>,
    typed_name: &str,
) -> Result<String> {
    let Some(id) = student_id else {
        return Ok(typed_name.to_string());
    };
    let student = get_student_by_id(db, id)
        .await?
        .ok_or(Error::StudentNotFound { id })?;
    Ok(student.name)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_student, init_test_tracing, setup_test_db};

    #[tokio::test]
    async fn test_create_student_trims_and_drops_blank_fields() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let cache = QueryCache::new();

        let student = create_student(
            &db,
            &cache,
            NewStudent {
                name: "  Ana Costa ".to_string(),
                email: Some("ana@example.com".to_string()),
                phone: Some("   ".to_string()),
                ..NewStudent::default()
            },
        )
        .await?;

        assert_eq!(student.name, "Ana Costa");
        assert_eq!(student.email.as_deref(), Some("ana@example.com"));
        assert!(student.phone.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_student_rejects_blank_name() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = QueryCache::new();

        let result = create_student(&db, &cache, NewStudent::named("  ")).await;
        assert!(matches!(
            result,
            Err(Error::InvalidField { field: "name", .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_students_is_cached_until_write() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let cache = QueryCache::new();

        create_test_student(&db, &cache, "Maria Silva").await?;
        assert_eq!(list_students(&db, &cache).await?.len(), 1);
        assert!(cache.students().await.is_some());

        create_test_student(&db, &cache, "Pedro Santos").await?;
        assert!(cache.students().await.is_none());

        let students = list_students(&db, &cache).await?;
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Pedro Santos");
        Ok(())
    }

    #[tokio::test]
    async fn test_find_students_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = QueryCache::new();
        create_test_student(&db, &cache, "Maria Silva").await?;
        create_test_student(&db, &cache, "Mariana Souza").await?;
        create_test_student(&db, &cache, "Lucas Oliveira").await?;

        let found = find_students_by_name(&db, "mari").await?;
        let names: Vec<_> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Maria Silva", "Mariana Souza"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_students_by_name_folds_accented_case() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = QueryCache::new();
        create_test_student(&db, &cache, "JOÃO CONCEIÇÃO").await?;
        create_test_student(&db, &cache, "Ana Costa").await?;

        let found = find_students_by_name(&db, "joão").await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "JOÃO CONCEIÇÃO");

        let found = find_students_by_name(&db, "conceição").await?;
        assert_eq!(found.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_students_by_name_treats_wildcards_literally() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = QueryCache::new();
        create_test_student(&db, &cache, "Ana_Costa").await?;
        create_test_student(&db, &cache, "Anaxcosta").await?;
        create_test_student(&db, &cache, "Bruno 100% Silva").await?;

        let names: Vec<_> = find_students_by_name(&db, "ana_")
            .await?
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Ana_Costa"]);

        let names: Vec<_> = find_students_by_name(&db, "%")
            .await?
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Bruno 100% Silva"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_student() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = QueryCache::new();
        let student = create_test_student(&db, &cache, "Lucas Oliveira").await?;

        delete_student(&db, &cache, student.id).await?;
        assert!(get_student_by_id(&db, student.id).await?.is_none());

        let again = delete_student(&db, &cache, student.id).await;
        assert!(matches!(again, Err(Error::StudentNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_student_name() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = QueryCache::new();
        let student = create_test_student(&db, &cache, "Maria Silva").await?;

        assert_eq!(
            resolve_student_name(&db, Some(student.id), "maria").await?,
            "Maria Silva"
        );
        assert_eq!(resolve_student_name(&db, None, "Avulso").await?, "Avulso");
        assert!(matches!(
            resolve_student_name(&db, Some(999), "x").await,
            Err(Error::StudentNotFound { id: 999 })
        ));
        Ok(())
    }
}
