use crate::{
    client::{Client, Response, Result},
    query::{field_call, fields, select_or, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "name", "description"];

/// `BoardClient` handles the board related queries and mutations of the monday.com API.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/boards
pub struct BoardClient<'a> {
    inner: &'a Client,
}

impl<'a> BoardClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List boards, filtered by `args` (`ids`, `limit`, `page`, `board_kind`, ...)
    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner.query("boards", args, &select).await
    }

    /// Create a board. `board_name` and `board_kind` are required.
    pub async fn create(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("create_board", args, Some(select.as_slice()))
            .await
    }

    /// Duplicate a board. `board_id` and `duplicate_type` are required; the
    /// selection applies to the new board.
    pub async fn duplicate(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = vec![Selection::nested(
            "board",
            select_or(select, DEFAULT_SELECT),
        )];
        self.inner
            .mutation("duplicate_board", args, Some(select.as_slice()))
            .await
    }

    /// Update one attribute of a board (`board_id`, `board_attribute`,
    /// `new_value`). The mutation returns a JSON scalar, so there is no
    /// selection.
    pub async fn update(&self, args: &Args) -> Result<Response> {
        self.inner.mutation("update_board", args, None).await
    }

    pub async fn archive(&self, board_id: u64, select: Option<&[Selection]>) -> Result<Response> {
        let args = Args::new().arg("board_id", board_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("archive_board", &args, Some(select.as_slice()))
            .await
    }

    pub async fn delete(&self, board_id: u64, select: Option<&[Selection]>) -> Result<Response> {
        let args = Args::new().arg("board_id", board_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("delete_board", &args, Some(select.as_slice()))
            .await
    }

    pub async fn delete_subscribers(
        &self,
        board_id: u64,
        user_ids: &[u64],
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new()
            .arg("board_id", board_id)
            .arg("user_ids", user_ids);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("delete_subscribers_from_board", &args, Some(select.as_slice()))
            .await
    }

    /// Items of a board, a page at a time. `page_args` takes `limit`, `cursor`
    /// and `query_params`.
    pub async fn items_page(
        &self,
        board_ids: &[u64],
        page_args: &Args,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new().arg("ids", board_ids);
        let items = select_or(select, &["id", "name"]);
        let select = vec![Selection::nested(
            field_call("items_page", page_args),
            vec![Selection::field("cursor"), Selection::nested("items", items)],
        )];
        self.inner.query("boards", &args, &select).await
    }

    /// The ids and titles of a board's columns, handy before building
    /// `column_values`
    pub async fn columns(&self, board_id: u64) -> Result<Response> {
        let args = Args::new().arg("ids", board_id);
        let select = vec![Selection::nested(
            "columns",
            fields(vec!["id", "title", "type"]),
        )];
        self.inner.query("boards", &args, &select).await
    }
}
