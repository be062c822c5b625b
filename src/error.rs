use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（连接、超时等）
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务端返回非 2xx 状态
    #[error("API返回错误响应 ({endpoint}): status={status}, message={message:?}")]
    BadStatus {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// 响应体无法解析
    #[error("JSON解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// 出错的接口路径
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::RequestFailed { endpoint, .. }
            | ApiError::BadStatus { endpoint, .. }
            | ApiError::JsonParseFailed { endpoint, .. } => endpoint,
        }
    }
}

/// 客户端校验失败，对应浏览器里 required / disabled 拦下的提交
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("question cannot be empty")]
    EmptyQuestion,
    #[error("answer cannot be empty")]
    EmptyAnswer,
    #[error("no category selected")]
    NoCategorySelected,
    #[error("new category cannot be empty when category is \"other\"")]
    EmptyNewCategory,
}

/// 表单组件错误
///
/// 组件只区分两种网络失败：分类加载失败和题目提交失败。
/// 其余变体描述的是调用方的用法问题（字段名错误、取值越界、已卸载）。
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{}", CATEGORY_LOAD_MESSAGE)]
    CategoryLoad(#[source] ApiError),
    #[error("{}", QUESTION_SUBMIT_MESSAGE)]
    Submit(#[source] ApiError),
    #[error("form is not submittable: {0}")]
    Invalid(#[from] ValidationError),
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: String, value: String },
    #[error("form was unmounted before the request completed")]
    Unmounted,
}

const CATEGORY_LOAD_MESSAGE: &str = "Unable to load categories. Please try your request again";
const QUESTION_SUBMIT_MESSAGE: &str = "Unable to add question. Please try your request again";

impl FormError {
    /// 面向用户的固定提示文案，由展示层决定如何呈现（弹窗、行内提示、toast）
    pub fn user_message(&self) -> String {
        match self {
            FormError::CategoryLoad(_) => CATEGORY_LOAD_MESSAGE.to_string(),
            FormError::Submit(_) => QUESTION_SUBMIT_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// 是否为网络类失败（可由用户手动重试）
    pub fn is_retryable(&self) -> bool {
        matches!(self, FormError::CategoryLoad(_) | FormError::Submit(_))
    }
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 基础地址无法解析
    #[error("无效的 API 地址: {url}")]
    InvalidBaseUrl { url: String },
    /// HTTP 客户端构建失败
    #[error("HTTP 客户端构建失败: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
