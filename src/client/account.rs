use crate::{
    client::{Client, Response, Result},
    query::{select_or, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "name"];

/// `AccountClient` reads the account the API token belongs to.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/account
pub struct AccountClient<'a> {
    inner: &'a Client,
}

impl<'a> AccountClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    pub async fn query(&self, select: Option<&[Selection]>) -> Result<Response> {
        let select = vec![Selection::nested(
            "account",
            select_or(select, DEFAULT_SELECT),
        )];
        self.inner.query("users", &Args::new(), &select).await
    }
}
