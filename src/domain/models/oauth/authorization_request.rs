/// 인가 서버로 보낼 Authorization Code 요청
///
/// `to_url()`은 값을 URL 인코딩하여 `authorize_url?response_type=code&...` 형태로 만듭니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub response_type: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub state: String,
}

impl AuthorizationRequest {
    pub fn new(client_id: &str, redirect_uri: &str, state: &str) -> Self {
        Self {
            response_type: "code".to_string(),
            client_id: client_id.to_string(),
            redirect_uri: redirect_uri.to_string(),
            state: state.to_string(),
        }
    }

    pub fn to_url(&self, authorize_url: &str) -> String {
        let params = [
            ("response_type", self.response_type.as_str()),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("state", self.state.as_str()),
        ];

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", authorize_url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_to_url_encodes_values() {
        let request = AuthorizationRequest::new(
            "X",
            "https://app.example.com/zoom/oauth/callback/?a=1",
            "s1",
        );

        let url = request.to_url("https://zoom.us/oauth/authorize");
        assert!(url.starts_with("https://zoom.us/oauth/authorize?"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fapp.example.com%2Fzoom%2Foauth%2Fcallback%2F%3Fa%3D1"));

        let parsed = reqwest::Url::parse(&url).unwrap();
        let pairs: HashMap<String, String> = parsed.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs["response_type"], "code");
        assert_eq!(pairs["client_id"], "X");
        assert_eq!(pairs["redirect_uri"], "https://app.example.com/zoom/oauth/callback/?a=1");
        assert_eq!(pairs["state"], "s1");
    }
}
