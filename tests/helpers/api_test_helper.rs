// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层/HTTP层集成测试的通用辅助函数
// 隔离: 每个测试环境独立的内存库
// ==========================================

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use depot_ops::app::{router, AppState};
use depot_ops::config::ServerConfig;

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 包含 AppState（全部API实例），可直接构建 HTTP 路由
pub struct ApiTestEnv {
    pub state: Arc<AppState>,
}

impl ApiTestEnv {
    /// 创建空白测试环境（不写演示数据）
    pub fn new() -> Result<Self, String> {
        Self::with_config(ServerConfig {
            seed_demo_data: false,
            ..ServerConfig::default()
        })
    }

    /// 创建带 train_001 演示数据的测试环境
    pub fn with_demo_data() -> Result<Self, String> {
        Self::with_config(ServerConfig::default())
    }

    fn with_config(config: ServerConfig) -> Result<Self, String> {
        depot_ops::logging::init_test();
        let state = AppState::new(&config)?;
        Ok(Self {
            state: Arc::new(state),
        })
    }

    /// 基于同一 AppState 的 HTTP 路由
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }
}

// ==========================================
// HTTP 请求辅助
// ==========================================

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    raw_json_request(method, uri, body.to_string())
}

pub fn raw_json_request(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// 发送请求并把响应体解析为 JSON
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
