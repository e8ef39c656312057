use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaError {
    #[error("response missing 'data' array, full response: {0}")]
    InvalidResponse(String),
    #[error("video list did not end after {0} pages, refusing to paginate further")]
    TooManyPages(u32),
}
