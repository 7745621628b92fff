use thiserror::Error;

pub type OResult<T> = Result<T, OptionalError>;

#[derive(Error, Debug)]
pub enum OptionalError {
    #[error("called get() on an absent optional")]
    AbsentAccess,
}
