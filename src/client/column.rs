use crate::{
    client::{Client, Response, Result},
    query::{select_or, ArgValue, Args, Selection},
};
use serde_json::Value;

const DEFAULT_SELECT: &[&str] = &["id", "title", "description"];
const DEFAULT_VALUE_SELECT: &[&str] = &["id", "text", "type", "value"];
const DEFAULT_ITEM_SELECT: &[&str] = &["id", "name"];

/// `ColumnClient` handles board columns and the values items hold in them.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/columns
pub struct ColumnClient<'a> {
    inner: &'a Client,
}

impl<'a> ColumnClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Columns of the boards matched by `args`
    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = vec![Selection::nested(
            "columns",
            select_or(select, DEFAULT_SELECT),
        )];
        self.inner.query("boards", args, &select).await
    }

    /// Column values of the items matched by `args`
    pub async fn column_values(
        &self,
        args: &Args,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let select = vec![Selection::nested(
            "column_values",
            select_or(select, DEFAULT_VALUE_SELECT),
        )];
        self.inner.query("items", args, &select).await
    }

    /// Create a column. `board_id`, `title` and `column_type` are required.
    pub async fn create(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("create_column", args, Some(select.as_slice()))
            .await
    }

    pub async fn change_title(
        &self,
        args: &Args,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let select = select_or(select, &["id", "title"]);
        self.inner
            .mutation("change_column_title", args, Some(select.as_slice()))
            .await
    }

    /// Change a column's `title` or `description` (`board_id`, `column_id`,
    /// `column_property`, `value`)
    pub async fn change_metadata(
        &self,
        args: &Args,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let select = select_or(select, &["id", "title", "description"]);
        self.inner
            .mutation("change_column_metadata", args, Some(select.as_slice()))
            .await
    }

    /// Set one column of an item from a JSON value
    pub async fn change_value(
        &self,
        board_id: u64,
        item_id: u64,
        column_id: &str,
        value: Value,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new()
            .arg("board_id", board_id)
            .arg("item_id", item_id)
            .arg("column_id", ArgValue::quoted(column_id))
            .arg("value", ArgValue::Json(value));
        let select = select_or(select, DEFAULT_ITEM_SELECT);
        self.inner
            .mutation("change_column_value", &args, Some(select.as_slice()))
            .await
    }

    /// Set one column of an item from its plain text form, e.g. a status label
    pub async fn change_simple_value(
        &self,
        board_id: u64,
        item_id: u64,
        column_id: &str,
        value: &str,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new()
            .arg("board_id", board_id)
            .arg("item_id", item_id)
            .arg("column_id", ArgValue::quoted(column_id))
            .arg("value", ArgValue::quoted(value));
        let select = select_or(select, DEFAULT_ITEM_SELECT);
        self.inner
            .mutation("change_simple_column_value", &args, Some(select.as_slice()))
            .await
    }

    /// Set several columns of an item at once; `column_values` maps column
    /// ids to values
    pub async fn change_multiple_values(
        &self,
        board_id: u64,
        item_id: u64,
        column_values: Value,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new()
            .arg("board_id", board_id)
            .arg("item_id", item_id)
            .arg("column_values", ArgValue::Json(column_values));
        let select = select_or(select, DEFAULT_ITEM_SELECT);
        self.inner
            .mutation(
                "change_multiple_column_values",
                &args,
                Some(select.as_slice()),
            )
            .await
    }

    pub async fn delete(
        &self,
        board_id: u64,
        column_id: &str,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new()
            .arg("board_id", board_id)
            .arg("column_id", ArgValue::quoted(column_id));
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("delete_column", &args, Some(select.as_slice()))
            .await
    }
}
