use crate::report_retrieval::domain::{Endpoint, ProjectSearchResult};
use crate::shared::error::DtError;
use crate::shared::Result;

/// Status code the server uses for every successful read
pub const HTTP_OK: u16 = 200;

/// The server's answer to one GET call, body fully read
///
/// Decoding happens here, at the transport boundary: callers ask for the
/// shape they expect and get a `DecodeFailed` error if the body does not
/// have it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    endpoint: Endpoint,
    status: u16,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(endpoint: Endpoint, status: u16, body: Vec<u8>) -> Self {
        Self {
            endpoint,
            status,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == HTTP_OK
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body as a project search result list
    pub fn as_project_list(&self) -> std::result::Result<Vec<ProjectSearchResult>, DtError> {
        serde_json::from_slice(&self.body).map_err(|e| self.decode_error(e))
    }

    /// Decodes the body as an arbitrary JSON document
    pub fn as_document(&self) -> std::result::Result<serde_json::Value, DtError> {
        serde_json::from_slice(&self.body).map_err(|e| self.decode_error(e))
    }

    fn decode_error(&self, error: serde_json::Error) -> DtError {
        DtError::DecodeFailed {
            endpoint: self.endpoint.to_string(),
            details: error.to_string(),
        }
    }
}

/// DependencyTrackApi port for reading resources from the server
///
/// Implementations own the authenticated session (base URL, API key,
/// timeout). Any HTTP status, including errors, is returned as an
/// [`ApiResponse`]; interpreting it is up to the caller.
pub trait DependencyTrackApi {
    /// Issues a GET request for the endpoint and reads the whole body
    ///
    /// # Errors
    /// Returns an error only when no response was received:
    /// - The connection could not be established
    /// - The request timed out
    /// - The body could not be read
    fn get(&self, endpoint: &Endpoint) -> Result<ApiResponse>;
}

impl<T: DependencyTrackApi + ?Sized> DependencyTrackApi for &T {
    fn get(&self, endpoint: &Endpoint) -> Result<ApiResponse> {
        (**self).get(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_response(body: &str) -> ApiResponse {
        ApiResponse::new(
            Endpoint::ProjectSearch {
                name: "Widget".to_string(),
            },
            200,
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn test_as_project_list() {
        let response = search_response(
            r#"[{"uuid":"u1","version":"1.0"},{"uuid":"u2","version":"2.0"}]"#,
        );
        let projects = response.as_project_list().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].uuid, "u2");
    }

    #[test]
    fn test_as_project_list_rejects_object() {
        let response = search_response(r#"{"uuid":"u1"}"#);
        let err = response.as_project_list().unwrap_err();
        assert!(matches!(err, DtError::DecodeFailed { .. }));
        assert!(err.to_string().contains("/api/v1/project"));
    }

    #[test]
    fn test_as_document_rejects_garbage() {
        let response = search_response("<html>login</html>");
        assert!(matches!(
            response.as_document(),
            Err(DtError::DecodeFailed { .. })
        ));
    }

    #[test]
    fn test_as_document() {
        let response = search_response(r#"{"bomFormat":"CycloneDX"}"#);
        let document = response.as_document().unwrap();
        assert_eq!(document["bomFormat"], "CycloneDX");
    }

    #[test]
    fn test_only_200_is_success() {
        let endpoint = Endpoint::Vdr {
            uuid: "u1".to_string(),
        };
        assert!(ApiResponse::new(endpoint.clone(), 200, vec![]).is_success());
        assert!(!ApiResponse::new(endpoint.clone(), 204, vec![]).is_success());
        assert!(!ApiResponse::new(endpoint, 404, vec![]).is_success());
    }
}
