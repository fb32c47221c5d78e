//! Shared Diesel error mapping for the content repositories.
//!
//! Each repository owns its port error enum, so the helpers here are generic
//! over the constructors. Constraint violations (duplicate slugs, restricted
//! foreign keys) carry domain meaning and are matched at the call site
//! before falling back to these catch-alls.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_content_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel error variants that carry no constraint semantics.
///
/// Closed connections become connection errors; everything else is a query
/// error with a stable message. Full diagnostics go to the debug log rather
/// than the returned error.
pub(crate) fn map_content_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    query: Q,
    connection: C,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the generic mapping helpers.
    use super::*;
    use crate::domain::ports::CategoryRepositoryError;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_preserve_the_checkout_message() {
        let error = map_content_pool_error(
            PoolError::checkout("connection refused"),
            CategoryRepositoryError::connection,
        );
        assert!(matches!(error, CategoryRepositoryError::Connection { .. }));
        assert!(error.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_a_query_error() {
        let error = map_content_diesel_error(
            diesel::result::Error::NotFound,
            CategoryRepositoryError::query,
            CategoryRepositoryError::connection,
        );
        assert!(matches!(error, CategoryRepositoryError::Query { .. }));
        assert!(error.to_string().contains("record not found"));
    }
}
