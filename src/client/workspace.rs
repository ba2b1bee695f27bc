use crate::{
    client::{Client, Response, Result},
    query::{select_or, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "name", "description"];

/// `WorkspaceClient` handles workspaces.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/workspaces
pub struct WorkspaceClient<'a> {
    inner: &'a Client,
}

impl<'a> WorkspaceClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner.query("workspaces", args, &select).await
    }

    /// Create a workspace. `name` and `kind` are required.
    pub async fn create(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("create_workspace", args, Some(select.as_slice()))
            .await
    }

    pub async fn delete(
        &self,
        workspace_id: u64,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new().arg("workspace_id", workspace_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("delete_workspace", &args, Some(select.as_slice()))
            .await
    }
}
