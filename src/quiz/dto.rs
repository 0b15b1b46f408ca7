use serde::Serialize;

use crate::quiz::repo::QuizId;

/// Response returned after quiz creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizIdResponse {
    pub quiz_id: QuizId,
}

/// One entry of a quiz listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub quiz_id: QuizId,
    pub name: String,
}

/// Response returned by the list operation, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizListResponse {
    pub quizzes: Vec<QuizSummary>,
}

/// Full read-only view of one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizInfoResponse {
    pub quiz_id: QuizId,
    pub name: String,
    pub time_created: i64,
    pub time_last_edited: i64,
    pub description: String,
}
