/// Uniform result of every gateway call.
///
/// Non-2xx responses and transport failures both resolve to
/// `Failure`; callers do not distinguish a network outage from a
/// server-declared error. Transport failures carry status 0 (no
/// response was received).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Success { data: T, status: u16 },
    Failure { error: String, status: u16 },
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// HTTP status of the response, or 0 for transport failures.
    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Success { status, .. } => *status,
            ApiResponse::Failure { status, .. } => *status,
        }
    }

    /// The payload, discarding failure detail.
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Best-effort error message for user-facing notification.
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Success { .. } => None,
            ApiResponse::Failure { error, .. } => Some(error),
        }
    }

    /// Map the success payload, keeping failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success { data, status } => ApiResponse::Success {
                data: f(data),
                status,
            },
            ApiResponse::Failure { error, status } => ApiResponse::Failure { error, status },
        }
    }
}
