use crate::{
    client::{Client, Response, Result},
    query::{select_or, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "body", "created_at"];

/// `UpdateClient` handles updates, the comments posted on items.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/updates
pub struct UpdateClient<'a> {
    inner: &'a Client,
}

impl<'a> UpdateClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner.query("updates", args, &select).await
    }

    /// Post an update. `item_id` and `body` are required.
    pub async fn create(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("create_update", args, Some(select.as_slice()))
            .await
    }

    pub async fn like(&self, update_id: u64, select: Option<&[Selection]>) -> Result<Response> {
        let args = Args::new().arg("update_id", update_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("like_update", &args, Some(select.as_slice()))
            .await
    }

    /// Remove every update from an item
    pub async fn clear_item_updates(
        &self,
        item_id: u64,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new().arg("item_id", item_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("clear_item_updates", &args, Some(select.as_slice()))
            .await
    }

    pub async fn delete(&self, update_id: u64, select: Option<&[Selection]>) -> Result<Response> {
        let args = Args::new().arg("id", update_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("delete_update", &args, Some(select.as_slice()))
            .await
    }
}
