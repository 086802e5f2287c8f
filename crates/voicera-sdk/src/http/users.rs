/*
[INPUT]:  User identifiers, list filters and user payloads
[OUTPUT]: User records as JSON values
[POS]:    HTTP layer - user management endpoints
[UPDATE]: When adding user endpoints or changing paths
*/

use serde_json::Value;

use crate::http::request::{ApiRequest, segment};
use crate::http::{Result, VoiceraClient};
use crate::types::{Filters, list_items};

impl VoiceraClient {
    /// List users
    ///
    /// GET /users?{filters}
    pub async fn get_users(&self, filters: Option<&Filters>) -> Result<Vec<Value>> {
        let request = ApiRequest::get("/users").with_filters(filters);
        self.dispatch(request).await.map(list_items)
    }

    /// GET /users/{id}
    pub async fn get_user(&self, user_id: &str) -> Result<Value> {
        let request = ApiRequest::get(format!("/users/{}", segment(user_id)?));
        self.dispatch(request).await
    }

    /// POST /users
    pub async fn create_user(&self, user: Value) -> Result<Value> {
        let request = ApiRequest::post("/users").with_json(user);
        self.dispatch(request).await
    }

    /// PUT /users/{id}
    pub async fn update_user(&self, user_id: &str, user: Value) -> Result<Value> {
        let request = ApiRequest::put(format!("/users/{}", segment(user_id)?)).with_json(user);
        self.dispatch(request).await
    }

    /// DELETE /users/{id}
    pub async fn delete_user(&self, user_id: &str) -> Result<Value> {
        let request = ApiRequest::delete(format!("/users/{}", segment(user_id)?));
        self.dispatch(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, VoiceraClient};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> VoiceraClient {
        VoiceraClient::new(ClientConfig::default().with_base_url(server.uri()).with_api_key("test-key"))
            .expect("client init")
    }

    #[tokio::test]
    async fn test_get_users_with_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/users"))
            .and(query_param("role", "student"))
            .and(header("X-API-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "u1", "role": "student"}],
                "total": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let filters = crate::types::Filters::new().with("role", "student");
        let users = client_for(&server).get_users(Some(&filters)).await.expect("get_users");
        assert_eq!(users, vec![json!({"id": "u1", "role": "student"})]);
    }

    #[tokio::test]
    async fn test_update_user_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v1/users/u1"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"name": "Ada"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u1", "name": "Ada"})))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server)
            .update_user("u1", json!({"name": "Ada"}))
            .await
            .expect("update_user");
        assert_eq!(user["name"], "Ada");
    }

    #[tokio::test]
    async fn test_delete_user_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/users/u1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).delete_user("u1").await.expect("delete_user");
        assert_eq!(result, json!({}));
    }

    #[tokio::test]
    async fn test_dot_identifiers_never_leave_resource() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.delete_user("..").await.expect_err("delete_user(\"..\")");
        assert_eq!(err.status_code, 0);
        assert!(err.message.starts_with("Invalid request: "));

        assert!(client.get_user(".").await.is_err());
        assert!(client.update_user("", json!({})).await.is_err());
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }
}
