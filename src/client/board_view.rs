use crate::{
    client::{Client, Response, Result},
    query::{select_or, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "name", "type"];

/// `BoardViewClient` reads the views attached to boards.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/board-views
pub struct BoardViewClient<'a> {
    inner: &'a Client,
}

impl<'a> BoardViewClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Views of the boards matched by `args`
    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = vec![Selection::nested(
            "views",
            select_or(select, DEFAULT_SELECT),
        )];
        self.inner.query("boards", args, &select).await
    }
}
