/// A shortened link record from the `links` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub name: String,
    pub url: String,
}
