use tracing::{info, instrument, warn};

use crate::auth::repo::{self as users, UserId};
use crate::error::Error;
use crate::quiz::dto::{QuizIdResponse, QuizInfoResponse, QuizListResponse, QuizSummary};
use crate::quiz::repo::{self, QuizId};
use crate::store::DataStore;
use crate::validation::{alphanumeric_and_space_check, current_timestamp};

const QUIZ_NAME_MIN: usize = 3;
const QUIZ_NAME_MAX: usize = 30;
const DESCRIPTION_MAX: usize = 100;

fn ensure_user(store: &DataStore, auth_user_id: UserId) -> Result<(), Error> {
    if users::find_by_id(store, auth_user_id).is_none() {
        warn!(auth_user_id = auth_user_id.0, "unknown user");
        return Err(Error::UnknownUser);
    }
    Ok(())
}

fn check_quiz_name(name: &str) -> Result<(), Error> {
    if !alphanumeric_and_space_check(name) {
        warn!(name, "quiz name has invalid characters");
        return Err(Error::InvalidQuizName);
    }
    let len = name.chars().count();
    if len < QUIZ_NAME_MIN || len > QUIZ_NAME_MAX {
        warn!(name, len, "quiz name length out of range");
        return Err(Error::QuizNameLength);
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), Error> {
    if description.chars().count() > DESCRIPTION_MAX {
        warn!("description over length limit");
        return Err(Error::DescriptionTooLong);
    }
    Ok(())
}

/// All quizzes owned by the user, in creation order.
#[instrument(skip(store))]
pub fn list(store: &DataStore, auth_user_id: UserId) -> Result<QuizListResponse, Error> {
    ensure_user(store, auth_user_id)?;
    let quizzes = repo::list_by_author(store, auth_user_id)
        .map(|quiz| QuizSummary {
            quiz_id: quiz.quiz_id,
            name: quiz.name.clone(),
        })
        .collect();
    Ok(QuizListResponse { quizzes })
}

/// Creates a quiz. Validation runs in full before any mutation.
#[instrument(skip(store, description))]
pub fn create(
    store: &mut DataStore,
    auth_user_id: UserId,
    name: &str,
    description: &str,
) -> Result<QuizIdResponse, Error> {
    ensure_user(store, auth_user_id)?;
    check_quiz_name(name)?;
    if repo::name_taken_by_author(store, auth_user_id, name, None) {
        warn!(auth_user_id = auth_user_id.0, name, "quiz name already used");
        return Err(Error::QuizNameInUse);
    }
    check_description(description)?;

    let quiz_id = repo::create(store, auth_user_id, name, description, current_timestamp());
    info!(quiz_id = quiz_id.0, auth_user_id = auth_user_id.0, "quiz created");
    Ok(QuizIdResponse { quiz_id })
}

/// Replaces the quiz description and refreshes `time_last_edited`.
#[instrument(skip(store, description))]
pub fn description_update(
    store: &mut DataStore,
    auth_user_id: UserId,
    quiz_id: QuizId,
    description: &str,
) -> Result<(), Error> {
    ensure_user(store, auth_user_id)?;
    let quiz = repo::find_by_id(store, quiz_id).ok_or(Error::UnknownQuiz)?;
    if quiz.quiz_author_id != auth_user_id {
        warn!(
            quiz_id = quiz_id.0,
            auth_user_id = auth_user_id.0,
            "description update by non-owner"
        );
        return Err(Error::NotQuizOwner);
    }
    check_description(description)?;

    let now = current_timestamp();
    let quiz = repo::find_by_id_mut(store, quiz_id).ok_or(Error::UnknownQuiz)?;
    quiz.description = description.to_owned();
    quiz.time_last_edited = now;
    info!(quiz_id = quiz_id.0, "quiz description updated");
    Ok(())
}

/// Renames a quiz and refreshes `time_last_edited`. Renaming a quiz to its
/// current name skips the per-owner uniqueness re-check (it is already unique
/// against itself) but still counts as an edit.
#[instrument(skip(store))]
pub fn name_update(
    store: &mut DataStore,
    auth_user_id: UserId,
    quiz_id: QuizId,
    name: &str,
) -> Result<(), Error> {
    ensure_user(store, auth_user_id)?;
    let quiz = repo::find_by_id(store, quiz_id).ok_or(Error::UnknownQuiz)?;
    if quiz.quiz_author_id != auth_user_id {
        warn!(
            quiz_id = quiz_id.0,
            auth_user_id = auth_user_id.0,
            "name update by non-owner"
        );
        return Err(Error::NotQuizOwner);
    }
    check_quiz_name(name)?;
    if quiz.name != name && repo::name_taken_by_author(store, auth_user_id, name, Some(quiz_id)) {
        warn!(auth_user_id = auth_user_id.0, name, "quiz name already used");
        return Err(Error::QuizNameInUse);
    }

    let now = current_timestamp();
    let quiz = repo::find_by_id_mut(store, quiz_id).ok_or(Error::UnknownQuiz)?;
    quiz.name = name.to_owned();
    quiz.time_last_edited = now;
    info!(quiz_id = quiz_id.0, "quiz renamed");
    Ok(())
}

/// Permanently removes a quiz. The id is never reissued.
#[instrument(skip(store))]
pub fn remove(store: &mut DataStore, auth_user_id: UserId, quiz_id: QuizId) -> Result<(), Error> {
    ensure_user(store, auth_user_id)?;
    let quiz = repo::find_by_id(store, quiz_id).ok_or(Error::UnknownQuiz)?;
    if quiz.quiz_author_id != auth_user_id {
        warn!(
            quiz_id = quiz_id.0,
            auth_user_id = auth_user_id.0,
            "remove by non-owner"
        );
        return Err(Error::NotQuizOwner);
    }

    repo::remove(store, quiz_id);
    info!(quiz_id = quiz_id.0, "quiz removed");
    Ok(())
}

/// Read-only view of one quiz.
#[instrument(skip(store))]
pub fn info(
    store: &DataStore,
    auth_user_id: UserId,
    quiz_id: QuizId,
) -> Result<QuizInfoResponse, Error> {
    ensure_user(store, auth_user_id)?;
    let quiz = repo::find_by_id(store, quiz_id).ok_or(Error::UnknownQuiz)?;
    if quiz.quiz_author_id != auth_user_id {
        return Err(Error::NotQuizOwner);
    }
    Ok(QuizInfoResponse {
        quiz_id: quiz.quiz_id,
        name: quiz.name.clone(),
        time_created: quiz.time_created,
        time_last_edited: quiz.time_last_edited,
        description: quiz.description.clone(),
    })
}
