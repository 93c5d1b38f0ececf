//! Immutable query descriptions for the get-many/get-unique service calls.
//!
//! A [`QuerySpec`] collects the filter, ordering and page of a query as a
//! plain value. Nothing touches the database until one of the executors
//! (`all`, `one`, `count`) is called with a connection or transaction.

use sea_orm::{
    sea_query::IntoCondition, Condition, ConnectionTrait, DbErr, EntityTrait, Iterable, Order,
    PaginatorTrait, PrimaryKeyToColumn, QueryFilter, QueryOrder, QuerySelect, Select,
};

/// Offset/limit window applied to a get-many query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    /// Build a window from client supplied values; negatives clamp to zero.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.max(0) as u64,
            offset: offset.max(0) as u64,
        }
    }

    pub fn first(limit: u64) -> Self {
        Self { limit, offset: 0 }
    }

    pub fn capped(self, max_limit: u64) -> Self {
        Self {
            limit: self.limit.min(max_limit),
            ..self
        }
    }
}

/// Server side bound on client supplied pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagePolicy {
    pub max_limit: u64,
}

impl PagePolicy {
    pub const DEFAULT_MAX_LIMIT: u64 = 500;

    pub fn new(max_limit: u64) -> Self {
        Self { max_limit }
    }

    pub fn page(&self, limit: i32, offset: i32) -> Pagination {
        Pagination::new(limit.into(), offset.into()).capped(self.max_limit)
    }
}

impl Default for PagePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LIMIT)
    }
}

#[derive(Clone, Debug)]
pub struct QuerySpec<E: EntityTrait> {
    condition: Condition,
    order: Vec<(E::Column, Order)>,
    page: Option<Pagination>,
}

impl<E: EntityTrait> Default for QuerySpec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> QuerySpec<E> {
    pub fn new() -> Self {
        Self {
            condition: Condition::all(),
            order: Vec::new(),
            page: None,
        }
    }

    /// Add a predicate; all predicates must hold.
    pub fn filter<F: IntoCondition>(mut self, filter: F) -> Self {
        self.condition = self.condition.add(filter.into_condition());
        self
    }

    pub fn order_asc(mut self, column: E::Column) -> Self {
        self.order.push((column, Order::Asc));
        self
    }

    pub fn order_desc(mut self, column: E::Column) -> Self {
        self.order.push((column, Order::Desc));
        self
    }

    /// Order by the creation timestamp, breaking ties on the primary key.
    /// Ids from [`new_id`](crate::services::new_id) grow with creation time,
    /// so rows created within the same instant keep their insertion order.
    pub fn chronological(self, created_at: E::Column) -> Self {
        E::PrimaryKey::iter().fold(self.order_asc(created_at), |spec, key| {
            spec.order_asc(key.into_column())
        })
    }

    pub fn page(mut self, page: Pagination) -> Self {
        self.page = Some(page);
        self
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.page
    }

    fn select(&self) -> Select<E> {
        self.order.iter().fold(
            E::find().filter(self.condition.clone()),
            |select, (column, order)| select.order_by(*column, order.clone()),
        )
    }

    pub async fn all<C: ConnectionTrait>(&self, db: &C) -> Result<Vec<E::Model>, DbErr> {
        let select = match self.page {
            Some(page) => self.select().offset(page.offset).limit(page.limit),
            None => self.select(),
        };
        select.all(db).await
    }

    pub async fn one<C: ConnectionTrait>(&self, db: &C) -> Result<Option<E::Model>, DbErr> {
        self.select().one(db).await
    }

    /// Count matching rows, ignoring ordering and pagination.
    pub async fn count<C>(&self, db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
        E::Model: Sync,
    {
        E::find().filter(self.condition.clone()).count(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::teams;
    use sea_orm::{ColumnTrait, DbBackend, QueryTrait};

    #[test]
    fn test_pagination_clamps_negative_values() {
        assert_eq!(Pagination::new(-5, -1), Pagination { limit: 0, offset: 0 });
        assert_eq!(Pagination::new(10, 3), Pagination { limit: 10, offset: 3 });
    }

    #[test]
    fn test_page_policy_caps_limit() {
        let policy = PagePolicy::new(50);
        assert_eq!(policy.page(1_000, 20), Pagination { limit: 50, offset: 20 });
        assert_eq!(policy.page(10, 0), Pagination { limit: 10, offset: 0 });
        assert_eq!(PagePolicy::default().max_limit, 500);
    }

    #[test]
    fn test_spec_is_a_value() {
        let base = QuerySpec::<teams::Entity>::new().filter(teams::Column::ClusterId.eq("c-1"));
        let paged = base.clone().page(Pagination::first(2));

        assert_eq!(base.pagination(), None);
        assert_eq!(paged.pagination(), Some(Pagination::first(2)));
    }

    #[test]
    fn test_chronological_orders_by_created_at_then_id() {
        let spec = QuerySpec::<teams::Entity>::new().chronological(teams::Column::CreatedAt);
        let sql = spec.select().build(DbBackend::Sqlite).to_string();

        assert!(
            sql.ends_with(r#"ORDER BY "teams"."created_at" ASC, "teams"."id" ASC"#),
            "{sql}"
        );
    }
}
