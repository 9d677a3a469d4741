//! Token handling for the Gist API

/// Bearer credentials attached to authenticated Gist requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistAuth {
    token: String,
}

impl GistAuth {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Build credentials from an optional token, treating an empty string as absent
    pub fn from_optional(token: Option<String>) -> Option<Self> {
        token.filter(|t| !t.is_empty()).map(Self::new)
    }

    /// Value of the `authorization` header
    pub fn get_auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_embeds_token() {
        let auth = GistAuth::new("ghp_abc123".to_string());
        assert_eq!(auth.get_auth_header(), "Bearer ghp_abc123");
    }

    #[test]
    fn test_from_optional_drops_empty_token() {
        assert!(GistAuth::from_optional(None).is_none());
        assert!(GistAuth::from_optional(Some(String::new())).is_none());
        assert!(GistAuth::from_optional(Some("t".to_string())).is_some());
    }
}
