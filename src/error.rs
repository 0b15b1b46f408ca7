use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Broad failure category, useful for a transport layer mapping errors to
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Referenced user or quiz id does not exist.
    NotFound,
    /// Entity exists but is not owned by the caller.
    Authorization,
    /// Field violates a length or charset rule.
    Format,
    /// Uniqueness constraint violated.
    Conflict,
}

/// Every failure the admin layer can report. All of them are
/// caller-correctable; none abort the process or leave the store partially
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Email address used by another user")]
    EmailInUse,
    #[error("Email address is not valid")]
    InvalidEmail,
    #[error("NameFirst contains characters other than letters, spaces, hyphens, or apostrophes")]
    InvalidNameFirst,
    #[error("NameFirst must be between 2 and 20 characters long")]
    NameFirstLength,
    #[error("NameLast contains characters other than letters, spaces, hyphens, or apostrophes")]
    InvalidNameLast,
    #[error("NameLast must be between 2 and 20 characters long")]
    NameLastLength,
    #[error("Password must have at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain at least one letter and at least one number")]
    PasswordTooWeak,
    #[error("Email address does not exist")]
    UnknownEmail,
    #[error("Password is not correct for the given email")]
    IncorrectPassword,
    #[error("AuthUserId is not a valid user")]
    UnknownUser,
    #[error("Quiz ID does not refer to a valid quiz")]
    UnknownQuiz,
    #[error("Quiz ID does not refer to a quiz that this user owns")]
    NotQuizOwner,
    #[error("Name contains invalid characters. Valid characters are alphanumeric and spaces")]
    InvalidQuizName,
    #[error("Name is either less than 3 characters long or more than 30 characters long")]
    QuizNameLength,
    #[error("Name is already used by the current logged in user for another quiz")]
    QuizNameInUse,
    #[error("Description is more than 100 characters in length")]
    DescriptionTooLong,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownEmail | Error::UnknownUser | Error::UnknownQuiz => ErrorKind::NotFound,
            Error::NotQuizOwner | Error::IncorrectPassword => ErrorKind::Authorization,
            Error::EmailInUse | Error::QuizNameInUse => ErrorKind::Conflict,
            Error::InvalidEmail
            | Error::InvalidNameFirst
            | Error::NameFirstLength
            | Error::InvalidNameLast
            | Error::NameLastLength
            | Error::PasswordTooShort
            | Error::PasswordTooWeak
            | Error::InvalidQuizName
            | Error::QuizNameLength
            | Error::DescriptionTooLong => ErrorKind::Format,
        }
    }
}

// Wire shape is `{"error": "<message>"}`; callers branch on the `error` key.
impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("Error", 1)?;
        body.serialize_field("error", &self.to_string())?;
        body.end()
    }
}
