#[cfg(test)]
mod tests {
    use serde_json::json;
    use shared::models::{GoogleLoginRequest, ServerReply, SigninRequest, SignupRequest};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use wiremock::matchers::{body_json, method, path};

    use crate::api::FotogramClient;

    fn signup_request() -> SignupRequest {
        SignupRequest {
            name: "Test User".to_string(),
            user_name: "test_user".to_string(),
            email: "test@example.com".to_string(),
            password: "Passw0rd!".to_string(),
        }
    }

    fn grant_body() -> serde_json::Value {
        json!({
            "token": "jwt-abc",
            "user": {
                "_id": "64f0c1",
                "name": "Test User",
                "userName": "test_user",
                "email": "test@example.com"
            }
        })
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = FotogramClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn empty_base_url_means_same_origin() {
        let client = FotogramClient::new("");
        assert_eq!(client.base_url, "");
    }

    #[tokio::test]
    async fn signup_posts_wire_field_names() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .and(body_json(json!({
                "name": "Test User",
                "userName": "test_user",
                "email": "test@example.com",
                "password": "Passw0rd!"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "message": "Signed up successfully" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = FotogramClient::new(&server.uri());
        let reply = client.signup(&signup_request()).await.unwrap();
        match reply {
            ServerReply::Success(accepted) => {
                assert_eq!(accepted.message, "Signed up successfully");
            }
            ServerReply::Failure { error } => panic!("unexpected failure: {error}"),
        }
    }

    #[tokio::test]
    async fn signup_surfaces_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "error": "User already exists" })),
            )
            .mount(&server)
            .await;

        let client = FotogramClient::new(&server.uri());
        let reply = client.signup(&signup_request()).await.unwrap();
        assert_eq!(
            reply,
            ServerReply::Failure {
                error: "User already exists".to_string()
            }
        );
    }

    #[tokio::test]
    async fn signin_returns_credential_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signin"))
            .and(body_json(json!({
                "email": "test@example.com",
                "password": "Passw0rd!"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(grant_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = FotogramClient::new(&server.uri());
        let request = SigninRequest {
            email: "test@example.com".to_string(),
            password: "Passw0rd!".to_string(),
        };
        let reply = client.signin(&request).await.unwrap();
        match reply {
            ServerReply::Success(grant) => {
                assert_eq!(grant.token, "jwt-abc");
                assert_eq!(grant.user.user_name, "test_user");
            }
            ServerReply::Failure { error } => panic!("unexpected failure: {error}"),
        }
    }

    #[tokio::test]
    async fn google_login_posts_wire_field_names() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/googleLogin"))
            .and(body_json(json!({
                "name": "Test User",
                "userName": "test.user",
                "email": "test.user@example.com",
                "email_verified": true,
                "clientId": "407408718192.apps.googleusercontent.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(grant_body()))
            .expect(1)
            .mount(&server)
            .await;

        let request = GoogleLoginRequest {
            name: "Test User".to_string(),
            user_name: "test.user".to_string(),
            email: "test.user@example.com".to_string(),
            email_verified: true,
            client_id: "407408718192.apps.googleusercontent.com".to_string(),
            photo: None,
        };
        let client = FotogramClient::new(&server.uri());
        let reply = client.google_login(&request).await.unwrap();
        assert!(reply.is_success());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = FotogramClient::new(&uri);
        let result = client.signup(&signup_request()).await;
        assert!(result.is_err());
    }
}
