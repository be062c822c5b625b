/// 题库后端 API 客户端
///
/// 封装分类目录服务（GET /categories）与题目录入服务（POST /questions）两个调用
use crate::config::Config;
use crate::error::{ApiError, ConfigError};
use crate::models::category::{Categories, CategoriesResponse};
use crate::models::question::{ErrorBody, NewQuestion, QuestionCreated};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

const CATEGORIES_ENDPOINT: &str = "categories";
const QUESTIONS_ENDPOINT: &str = "questions";

/// 表单组件依赖的两个后端能力
///
/// 每个调用只发一次请求，不做重试。
pub trait TriviaApi: Send + Sync {
    /// 获取分类目录
    fn fetch_categories(&self) -> impl Future<Output = Result<Categories, ApiError>> + Send;

    /// 创建题目；任何 2xx 都算成功
    fn create_question(
        &self,
        question: &NewQuestion,
    ) -> impl Future<Output = Result<QuestionCreated, ApiError>> + Send;
}

impl<T: TriviaApi> TriviaApi for std::sync::Arc<T> {
    fn fetch_categories(&self) -> impl Future<Output = Result<Categories, ApiError>> + Send {
        (**self).fetch_categories()
    }

    fn create_question(
        &self,
        question: &NewQuestion,
    ) -> impl Future<Output = Result<QuestionCreated, ApiError>> + Send {
        (**self).create_question(question)
    }
}

/// 基于 reqwest 的题库客户端
///
/// 启用 cookie store，相当于浏览器里的 `credentials: "include"`。
#[derive(Clone, Debug)]
pub struct TriviaClient {
    http: reqwest::Client,
    base_url: String,
}

impl TriviaClient {
    /// 创建新的题库客户端
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                url: config.api_base_url.clone(),
            });
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ConfigError::ClientBuildFailed)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// 非 2xx 响应转换为 BadStatus，尽量带上后端的 message
    async fn check_status(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|body| body.message);

        warn!("{} 返回错误状态 {}: {:?}", endpoint, status, message);

        Err(ApiError::BadStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn read_body(endpoint: &str, response: reqwest::Response) -> Result<String, ApiError> {
        response.text().await.map_err(|source| ApiError::RequestFailed {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

impl TriviaApi for TriviaClient {
    async fn fetch_categories(&self) -> Result<Categories, ApiError> {
        let url = self.url(CATEGORIES_ENDPOINT);
        debug!("获取分类目录: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::RequestFailed {
                endpoint: url.clone(),
                source,
            })?;

        let response = Self::check_status(&url, response).await?;
        let body = Self::read_body(&url, response).await?;

        let parsed: CategoriesResponse =
            serde_json::from_str(&body).map_err(|source| ApiError::JsonParseFailed {
                endpoint: url.clone(),
                source,
            })?;

        debug!("分类目录加载完成，共 {} 个分类", parsed.categories.len());
        Ok(parsed.categories)
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<QuestionCreated, ApiError> {
        let url = self.url(QUESTIONS_ENDPOINT);
        debug!("提交题目 Payload: {:?}", question);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(question)
            .send()
            .await
            .map_err(|source| ApiError::RequestFailed {
                endpoint: url.clone(),
                source,
            })?;

        let response = Self::check_status(&url, response).await?;
        let body = Self::read_body(&url, response).await?;

        // 成功响应的内容不影响结果
        let created = serde_json::from_str::<QuestionCreated>(&body).unwrap_or_default();
        debug!("提交题目结果: {:?}", created);

        Ok(created)
    }
}
