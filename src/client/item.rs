use crate::{
    client::{Client, Response, Result},
    query::{select_or, ArgValue, Args, Selection},
};
use serde_json::Value;

const DEFAULT_SELECT: &[&str] = &["id", "name", "created_at"];

/// `ItemClient` handles the items (rows) of boards.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/items
pub struct ItemClient<'a> {
    inner: &'a Client,
}

impl<'a> ItemClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Items matched by `args` (usually `ids`)
    pub async fn query(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner.query("items", args, &select).await
    }

    /// Create an item. `board_id` and `item_name` are required; pass
    /// `column_values` as [`ArgValue::Json`].
    pub async fn create(&self, args: &Args, select: Option<&[Selection]>) -> Result<Response> {
        let select = select_or(select, DEFAULT_SELECT);
        self.inner
            .mutation("create_item", args, Some(select.as_slice()))
            .await
    }

    pub async fn duplicate(
        &self,
        board_id: u64,
        item_id: u64,
        with_updates: bool,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let args = Args::new()
            .arg("board_id", board_id)
            .arg("item_id", item_id)
            .arg("with_updates", with_updates);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("duplicate_item", &args, Some(select.as_slice()))
            .await
    }

    pub async fn archive(&self, item_id: u64, select: Option<&[Selection]>) -> Result<Response> {
        let args = Args::new().arg("item_id", item_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("archive_item", &args, Some(select.as_slice()))
            .await
    }

    pub async fn delete(&self, item_id: u64, select: Option<&[Selection]>) -> Result<Response> {
        let args = Args::new().arg("item_id", item_id);
        let select = select_or(select, &["id"]);
        self.inner
            .mutation("delete_item", &args, Some(select.as_slice()))
            .await
    }

    /// Items of a board whose columns hold the given values. `columns` is the
    /// list of `{"column_id": ..., "column_values": [...]}` filters; `page_args`
    /// may carry `limit` and `cursor`.
    pub async fn page_by_column_values(
        &self,
        board_id: u64,
        columns: &[Value],
        page_args: &Args,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let mut args = Args::new().arg("board_id", board_id);
        if !columns.is_empty() {
            args.insert("columns", ArgValue::raw(column_filters(columns)));
        }
        for (key, value) in page_args.iter() {
            args.insert(key, value.clone());
        }

        let select = vec![
            Selection::field("cursor"),
            Selection::nested("items", select_or(select, &["id", "name"])),
        ];
        self.inner
            .query("items_page_by_column_values", &args, &select)
            .await
    }
}

// GraphQL input objects use bare keys, unlike JSON: `[{column_id: "status", ...}]`
fn column_filters(columns: &[Value]) -> String {
    let filters = columns
        .iter()
        .map(input_object)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", filters)
}

fn input_object(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let fields = map
                .iter()
                .map(|(key, value)| format!("{}: {}", key, input_object(value)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{}}}", fields)
        }
        Value::Array(values) => {
            let values = values.iter().map(input_object).collect::<Vec<_>>().join(", ");
            format!("[{}]", values)
        }
        other => other.to_string(),
    }
}
