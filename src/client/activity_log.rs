use crate::{
    client::{Client, Response, Result},
    query::{field_call, select_or, Args, Selection},
};

const DEFAULT_SELECT: &[&str] = &["id", "event", "data"];

/// `ActivityLogClient` reads the activity logs of boards.
///
/// monday.com API docs: https://developer.monday.com/api-reference/reference/activity-logs
pub struct ActivityLogClient<'a> {
    inner: &'a Client,
}

impl<'a> ActivityLogClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Activity logs of `board_ids`. `args` filters the logs themselves
    /// (`limit`, `page`, `from`, `to`, `user_ids`, ...).
    pub async fn query(
        &self,
        board_ids: &[u64],
        args: &Args,
        select: Option<&[Selection]>,
    ) -> Result<Response> {
        let board_args = Args::new().arg("ids", board_ids);
        let select = vec![Selection::nested(
            field_call("activity_logs", args),
            select_or(select, DEFAULT_SELECT),
        )];
        self.inner.query("boards", &board_args, &select).await
    }
}
