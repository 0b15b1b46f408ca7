use serde::{Deserialize, Serialize};

use crate::auth::repo::UserId;
use crate::store::DataStore;

/// Sequentially assigned quiz identifier, starting at 0 on a counter
/// independent of user ids. Never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub quiz_id: QuizId,
    /// Owner; immutable after creation.
    pub quiz_author_id: UserId,
    pub name: String,
    pub description: String,
    pub time_created: i64,
    pub time_last_edited: i64,
}

pub fn find_by_id(store: &DataStore, quiz_id: QuizId) -> Option<&Quiz> {
    store.quizzes.iter().find(|quiz| quiz.quiz_id == quiz_id)
}

pub fn find_by_id_mut(store: &mut DataStore, quiz_id: QuizId) -> Option<&mut Quiz> {
    store
        .quizzes
        .iter_mut()
        .find(|quiz| quiz.quiz_id == quiz_id)
}

/// Owned quizzes in insertion (creation) order.
pub fn list_by_author(store: &DataStore, author: UserId) -> impl Iterator<Item = &Quiz> {
    store
        .quizzes
        .iter()
        .filter(move |quiz| quiz.quiz_author_id == author)
}

/// True iff another quiz by the same author (excluding `except`, when given)
/// already carries `name`.
pub fn name_taken_by_author(
    store: &DataStore,
    author: UserId,
    name: &str,
    except: Option<QuizId>,
) -> bool {
    list_by_author(store, author)
        .filter(|quiz| Some(quiz.quiz_id) != except)
        .any(|quiz| quiz.name == name)
}

/// Appends a new quiz and advances the id counter. Field validation is the
/// caller's job.
pub fn create(
    store: &mut DataStore,
    author: UserId,
    name: &str,
    description: &str,
    now: i64,
) -> QuizId {
    let quiz_id = QuizId(store.next_quiz_id);
    store.next_quiz_id += 1;
    store.quizzes.push(Quiz {
        quiz_id,
        quiz_author_id: author,
        name: name.to_owned(),
        description: description.to_owned(),
        time_created: now,
        time_last_edited: now,
    });
    quiz_id
}

/// Hard delete; the id is never reissued.
pub fn remove(store: &mut DataStore, quiz_id: QuizId) {
    if let Some(pos) = store.quizzes.iter().position(|quiz| quiz.quiz_id == quiz_id) {
        store.quizzes.remove(pos);
    }
}
