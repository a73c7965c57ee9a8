//! Query-string driven listing: allow-listed sorting and case-insensitive search.
//!
//! Raw `sort` / `order` values never reach the query builder. They are resolved
//! against a static `(name, Column)` table first, and anything unknown falls back to
//! the entity's default ordering.

use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Case-insensitive `asc` / `desc`. Anything else is `None`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Sortable columns of one entity plus its default ordering.
#[derive(Debug, Clone, Copy)]
pub struct SortSpec<C: 'static> {
    pub fields: &'static [(&'static str, C)],
    pub default_field: C,
    pub default_order: SortOrder,
}

impl<C: ColumnTrait + Copy> SortSpec<C> {
    /// Resolves the requested field and direction independently; an unknown field
    /// does not discard a valid direction and vice versa.
    pub fn resolve(&self, sort: Option<&str>, order: Option<&str>) -> (C, SortOrder) {
        let field = sort
            .map(str::trim)
            .and_then(|name| self.fields.iter().find(|(key, _)| *key == name))
            .map(|(_, column)| *column)
            .unwrap_or(self.default_field);

        (field, SortOrder::parse(order).unwrap_or(self.default_order))
    }

    pub fn apply<E>(&self, query: Select<E>, sort: Option<&str>, order: Option<&str>) -> Select<E>
    where
        E: EntityTrait<Column = C>,
    {
        let (column, order) = self.resolve(sort, order);
        query.order_by(column, order.into())
    }
}

/// Escapes `\`, `%` and `_` so the term matches literally inside a LIKE pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `LOWER(col) LIKE '%term%'` over every column, OR-ed together.
///
/// Returns `None` for an absent or blank term so callers can skip the filter.
pub fn search_condition<C: ColumnTrait>(columns: &[C], term: Option<&str>) -> Option<Condition> {
    let term = term.map(str::trim).filter(|t| !t.is_empty())?;
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    let condition = columns.iter().fold(Condition::any(), |cond, column| {
        cond.add(
            Expr::expr(Func::lower(Expr::col(column.as_column_ref())))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
    });

    Some(condition)
}

/// Applies search then sorting to a base `SELECT`.
pub fn list_query<E>(
    spec: &SortSpec<E::Column>,
    search_columns: &[E::Column],
    search: Option<&str>,
    sort: Option<&str>,
    order: Option<&str>,
) -> Select<E>
where
    E: EntityTrait,
    E::Column: Copy,
{
    let mut query = E::find();
    if let Some(condition) = search_condition(search_columns, search) {
        query = query.filter(condition);
    }
    spec.apply(query, sort, order)
}
