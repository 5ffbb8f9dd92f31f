//! Conversion of handler panics into the generic 500 response

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::api::types::ApiError;

/// Response for a panicking handler, for `CatchPanicLayer::custom`.
///
/// The panic message goes into the response's failure detail so the request
/// log can record it; the body stays generic.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::internal(panic_message(payload.as_ref())).into_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::FailureDetail;
    use axum::http::StatusCode;

    #[test]
    fn test_panic_message_variants() {
        assert_eq!(panic_message(&"static str"), "static str");
        assert_eq!(panic_message(&"owned".to_string()), "owned");
        assert_eq!(panic_message(&42_u32), "handler panicked");
    }

    #[test]
    fn test_panic_response_is_generic_500() {
        let response = panic_response(Box::new("index out of bounds"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.extensions().get::<FailureDetail>(),
            Some(&FailureDetail("index out of bounds".to_string()))
        );
    }
}
