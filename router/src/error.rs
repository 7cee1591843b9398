use crate::route::Route;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("the route table has no routes")]
    EmptyTable,
    #[error("fallback redirect target `{0}` does not match any route")]
    UnmatchedRedirect(Route),
}
