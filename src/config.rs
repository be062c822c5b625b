/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库后端地址（分类目录服务与题目录入服务共用）
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 题目草稿 TOML 文件存放目录
    pub drafts_folder: String,
    /// 同时提交的草稿数量
    pub max_concurrent_submissions: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 提交失败的草稿记录文件
    pub failed_drafts_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 10,
            drafts_folder: "drafts".to_string(),
            max_concurrent_submissions: 4,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            failed_drafts_file: "failed.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源构建配置，缺失或无法解析的值回落到默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            api_base_url: lookup("TRIVIA_API_BASE_URL").unwrap_or(default.api_base_url),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.request_timeout_secs),
            drafts_folder: lookup("DRAFTS_FOLDER").unwrap_or(default.drafts_folder),
            max_concurrent_submissions: lookup("MAX_CONCURRENT_SUBMISSIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default.max_concurrent_submissions),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            failed_drafts_file: lookup("FAILED_DRAFTS_FILE").unwrap_or(default.failed_drafts_file),
        }
    }
}
