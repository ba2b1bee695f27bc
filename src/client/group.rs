use crate::{
    client::{Client, Response, Result},
    query::{field_call, select_or, ArgValue, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "title"];

/// `GroupClient` handles the groups of a board.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/groups
pub struct GroupClient<'a> {
    inner: &'a Client,
}

impl<'a> GroupClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Groups of the boards matched by `args`
    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = vec![Selection::nested(
            "groups",
            select_or(select, DEFAULT_SELECT),
        )];
        self.inner.query("boards", args, &select).await
    }

    /// Create a group. `board_id` and `group_name` are required.
    pub async fn create(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("create_group", args, Some(select.as_slice()))
            .await
    }

    /// Update one attribute of a group (`board_id`, `group_id`,
    /// `group_attribute`, `new_value`)
    pub async fn update(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("update_group", args, Some(select.as_slice()))
            .await
    }

    pub async fn delete(
        &self,
        board_id: u64,
        group_id: &str,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = group_args(board_id, group_id);
        let select = select_or(select, &["id", "deleted"]);
        self.inner
            .mutation("delete_group", &args, Some(select.as_slice()))
            .await
    }

    pub async fn archive(
        &self,
        board_id: u64,
        group_id: &str,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = group_args(board_id, group_id);
        let select = select_or(select, &["id", "archived"]);
        self.inner
            .mutation("archive_group", &args, Some(select.as_slice()))
            .await
    }

    /// Duplicate a group. Besides `board_id` and `group_id`, `args` may carry
    /// `add_to_top` and `group_title`.
    pub async fn duplicate(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("duplicate_group", args, Some(select.as_slice()))
            .await
    }

    /// Items of one group, a page at a time. `page_args` takes `limit`,
    /// `cursor` and `query_params`.
    pub async fn items_page(
        &self,
        board_id: u64,
        group_id: &str,
        page_args: &Args,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let board_args = Args::new().arg("ids", board_id);
        let group_filter = Args::new().arg("ids", ArgValue::quoted(group_id));
        let items = select_or(select, &["id", "name"]);

        let select = vec![Selection::nested(
            field_call("groups", &group_filter),
            vec![Selection::nested(
                field_call("items_page", page_args),
                vec![Selection::field("cursor"), Selection::nested("items", items)],
            )],
        )];
        self.inner.query("boards", &board_args, &select).await
    }
}

fn group_args(board_id: u64, group_id: &str) -> Args {
    Args::new()
        .arg("board_id", board_id)
        .arg("group_id", ArgValue::quoted(group_id))
}
