/*
[INPUT]:  Course identifiers, list filters and course payloads
[OUTPUT]: Course records as JSON values
[POS]:    HTTP layer - course management endpoints
[UPDATE]: When adding course endpoints or changing paths
*/

use serde_json::Value;

use crate::http::request::{ApiRequest, segment};
use crate::http::{Result, VoiceraClient};
use crate::types::{Filters, list_items};

impl VoiceraClient {
    /// List courses
    ///
    /// GET /courses?{filters}
    pub async fn get_courses(&self, filters: Option<&Filters>) -> Result<Vec<Value>> {
        let request = ApiRequest::get("/courses").with_filters(filters);
        self.dispatch(request).await.map(list_items)
    }

    /// GET /courses/{id}
    pub async fn get_course(&self, course_id: &str) -> Result<Value> {
        let request = ApiRequest::get(format!("/courses/{}", segment(course_id)?));
        self.dispatch(request).await
    }

    /// POST /courses
    pub async fn create_course(&self, course: Value) -> Result<Value> {
        let request = ApiRequest::post("/courses").with_json(course);
        self.dispatch(request).await
    }

    /// PUT /courses/{id}
    pub async fn update_course(&self, course_id: &str, course: Value) -> Result<Value> {
        let request = ApiRequest::put(format!("/courses/{}", segment(course_id)?)).with_json(course);
        self.dispatch(request).await
    }

    /// DELETE /courses/{id}
    pub async fn delete_course(&self, course_id: &str) -> Result<Value> {
        let request = ApiRequest::delete(format!("/courses/{}", segment(course_id)?));
        self.dispatch(request).await
    }
}
