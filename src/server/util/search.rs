//! Case-insensitive substring matching for list search.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait,
};

/// `LOWER(table.column) LIKE '%term%'` with the term lowercased.
///
/// Plain `LIKE` is case-sensitive on Postgres, so both sides are folded.
pub fn contains_ci<C: ColumnTrait>(column: C, term: &str) -> Expr {
    Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
        .like(format!("%{}%", term.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;

    #[test]
    fn lowercases_column_and_term_on_postgres() {
        let sql = entity::prelude::Work::find()
            .filter(contains_ci(entity::work::Column::Title, "Spring POEM"))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"LOWER("works"."title") LIKE '%spring poem%'"#), "{}", sql);
    }
}
