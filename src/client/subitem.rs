use crate::{
    client::{Client, Response, Result},
    query::{select_or, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "name", "created_at"];

/// `SubitemClient` handles the subitems nested under items.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/subitems
pub struct SubitemClient<'a> {
    inner: &'a Client,
}

impl<'a> SubitemClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Subitems of the items matched by `args`
    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = vec![Selection::nested(
            "subitems",
            select_or(select, DEFAULT_SELECT),
        )];
        self.inner.query("items", args, &select).await
    }

    /// Create a subitem. `parent_item_id` and `item_name` are required.
    pub async fn create(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("create_subitem", args, Some(select.as_slice()))
            .await
    }
}
