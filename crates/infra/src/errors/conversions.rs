//! Conversions from external infrastructure errors into domain errors.

use boardwatch_domain::BoardwatchError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BoardwatchError);

impl From<InfraError> for BoardwatchError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BoardwatchError> for InfraError {
    fn from(value: BoardwatchError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBoardwatchError {
    fn into_boardwatch(self) -> BoardwatchError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → BoardwatchError */
/* -------------------------------------------------------------------------- */

impl IntoBoardwatchError for HttpError {
    fn into_boardwatch(self) -> BoardwatchError {
        if self.is_timeout() {
            return BoardwatchError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return BoardwatchError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => BoardwatchError::Auth(message),
                429 => BoardwatchError::Network(message),
                400..=499 => BoardwatchError::InvalidInput(message),
                500..=599 => BoardwatchError::Network(message),
                _ => BoardwatchError::Network(message),
            };
        }

        BoardwatchError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_boardwatch())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use tokio::runtime::Runtime;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(status)).mount(&server).await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[test]
    fn http_status_401_maps_to_auth_error() {
        Runtime::new().unwrap().block_on(async {
            let error = status_error(StatusCode::UNAUTHORIZED).await;

            let mapped: BoardwatchError = InfraError::from(error).into();
            match mapped {
                BoardwatchError::Auth(msg) => assert!(msg.contains("401")),
                other => panic!("expected auth error, got {:?}", other),
            }
        });
    }

    #[test]
    fn http_status_404_maps_to_invalid_input() {
        Runtime::new().unwrap().block_on(async {
            let error = status_error(StatusCode::NOT_FOUND).await;

            let mapped: BoardwatchError = InfraError::from(error).into();
            match mapped {
                BoardwatchError::InvalidInput(msg) => assert!(msg.contains("404")),
                other => panic!("expected invalid input error, got {:?}", other),
            }
        });
    }

    #[test]
    fn http_status_500_maps_to_network_error() {
        Runtime::new().unwrap().block_on(async {
            let error = status_error(StatusCode::INTERNAL_SERVER_ERROR).await;

            let mapped: BoardwatchError = InfraError::from(error).into();
            match mapped {
                BoardwatchError::Network(msg) => assert!(msg.contains("500")),
                other => panic!("expected network error, got {:?}", other),
            }
        });
    }
}
