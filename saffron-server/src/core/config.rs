/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/saffron | 工作目录 (设置存储、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | UPSELL_API_URL | http://localhost:3100/recommend | 加购推荐服务地址 |
/// | GEOCODE_API_URL | https://api.mapbox.com/geocoding/v5/mapbox.places | 地址查询服务地址 |
/// | GEOCODE_API_KEY | (空) | 地址查询 API key |
/// | REQUEST_TIMEOUT_MS | 30000 | 出站请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/saffron HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储设置数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 加购推荐服务 URL
    pub upsell_api_url: String,
    /// 地址查询服务 URL
    pub geocode_api_url: String,
    /// 地址查询 API key
    pub geocode_api_key: String,
    /// 出站请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/saffron".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            upsell_api_url: std::env::var("UPSELL_API_URL")
                .unwrap_or_else(|_| "http://localhost:3100/recommend".into()),
            geocode_api_url: std::env::var("GEOCODE_API_URL")
                .unwrap_or_else(|_| "https://api.mapbox.com/geocoding/v5/mapbox.places".into()),
            geocode_api_key: std::env::var("GEOCODE_API_KEY").unwrap_or_default(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
