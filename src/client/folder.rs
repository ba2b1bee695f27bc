use crate::{
    client::{Client, Response, Result},
    query::{select_or, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "name"];

/// `FolderClient` handles the folders that group boards inside a workspace.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/folders
pub struct FolderClient<'a> {
    inner: &'a Client,
}

impl<'a> FolderClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner.query("folders", args, &select).await
    }

    /// Create a folder. `name` and `workspace_id` are required.
    pub async fn create(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("create_folder", args, Some(select.as_slice()))
            .await
    }

    pub async fn update(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("update_folder", args, Some(select.as_slice()))
            .await
    }

    pub async fn delete(&self, folder_id: u64, select: Option<&[Selection]>) -> Result<Response> {
        let args = Args::new().arg("folder_id", folder_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("delete_folder", &args, Some(select.as_slice()))
            .await
    }
}
