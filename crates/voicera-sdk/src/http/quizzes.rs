/*
[INPUT]:  Quiz identifiers, list filters, quiz payloads and answers
[OUTPUT]: Quiz records and grading results as JSON values
[POS]:    HTTP layer - quiz endpoints
[UPDATE]: When adding quiz endpoints or changing the submission body
*/

use serde_json::Value;

use crate::http::request::{ApiRequest, segment};
use crate::http::{Result, VoiceraClient};
use crate::types::{Filters, QuizSubmission, list_items};

impl VoiceraClient {
    /// List quizzes
    ///
    /// GET /quizzes?{filters}
    pub async fn get_quizzes(&self, filters: Option<&Filters>) -> Result<Vec<Value>> {
        let request = ApiRequest::get("/quizzes").with_filters(filters);
        self.dispatch(request).await.map(list_items)
    }

    /// GET /quizzes/{id}
    pub async fn get_quiz(&self, quiz_id: &str) -> Result<Value> {
        let request = ApiRequest::get(format!("/quizzes/{}", segment(quiz_id)?));
        self.dispatch(request).await
    }

    /// POST /quizzes
    pub async fn create_quiz(&self, quiz: Value) -> Result<Value> {
        let request = ApiRequest::post("/quizzes").with_json(quiz);
        self.dispatch(request).await
    }

    /// Submit answers for grading
    ///
    /// POST /quizzes/{id}/submit with `{"answers": [...]}`
    pub async fn submit_quiz(&self, quiz_id: &str, answers: Vec<Value>) -> Result<Value> {
        let request = ApiRequest::post(format!("/quizzes/{}/submit", segment(quiz_id)?))
            .with_body(&QuizSubmission { answers })?;
        self.dispatch(request).await
    }
}
