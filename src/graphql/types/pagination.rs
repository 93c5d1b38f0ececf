use async_graphql::InputObject;

/// Offset/limit window for list fields
#[derive(InputObject, Clone, Copy, Debug)]
pub struct PaginationInput {
    pub limit: i32,
    #[graphql(default)]
    pub offset: i32,
}
