use crate::api::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具：错误映射、请求体解析
// ==========================================

/// 错误响应（返回给调用方）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// ApiError -> HTTP 状态码
pub(super) fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApiError::BusinessRuleViolation(_) => StatusCode::CONFLICT,
        ApiError::DatabaseError(_)
        | ApiError::LockError(_)
        | ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "请求处理失败");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "请求被拒绝");
        }

        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

/// 解析 JSON 请求体；结构不符统一映射为 ValidationError (422)
pub(super) fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::ValidationError(rejection.body_text()))
}
