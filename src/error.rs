use bcbites_router::RouterError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Router(#[from] RouterError),
    #[error("no element with id `{0}` to mount into")]
    MountMissing(String),
    #[error("no browser window")]
    NoWindow,
}
