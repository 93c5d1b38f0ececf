use async_graphql::*;
use sea_orm::DatabaseConnection;

use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::Mutation;
use crate::graphql::queries::Query;
use crate::services::PagePolicy;

pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(db: DatabaseConnection, page_policy: PagePolicy) -> GraphQLSchema {
    Schema::build(Query, Mutation::default(), EmptySubscription)
        .data(GraphQLContext::new(db, page_policy))
        .finish()
}

/// SDL of the schema, for the `schema` command.
pub fn schema_sdl() -> String {
    Schema::build(Query, Mutation::default(), EmptySubscription)
        .finish()
        .sdl()
}
