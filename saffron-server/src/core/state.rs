use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{Config, Result};
use crate::services::{GeocodeClient, HttpUpsellClient, UpsellProvider};
use crate::settings::SettingsStorage;
use crate::store::MemStore;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务器的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<MemStore> | 内存数据存储 (fixtures) |
/// | settings | Arc<SettingsStorage> | 连接设置持久化 (redb) |
/// | upsell | Arc<dyn UpsellProvider> | 加购推荐客户端 |
/// | geocode | Arc<GeocodeClient> | 地址查询客户端 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 内存数据存储，启动时从 fixtures 填充
    pub store: Arc<MemStore>,
    /// 连接设置持久化存储
    pub settings: Arc<SettingsStorage>,
    /// 加购推荐客户端
    pub upsell: Arc<dyn UpsellProvider>,
    /// 地址查询客户端
    pub geocode: Arc<GeocodeClient>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打开设置存储、填充内存 fixtures、构建外部服务客户端。
    pub fn initialize(config: &Config) -> Result<Self> {
        let work_dir = PathBuf::from(&config.work_dir);
        std::fs::create_dir_all(&work_dir)?;

        let settings = SettingsStorage::open(work_dir.join("settings.redb"))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        let upsell = HttpUpsellClient::new(http_client.clone(), config.upsell_api_url.clone());
        let geocode = GeocodeClient::new(
            http_client,
            config.geocode_api_url.clone(),
            config.geocode_api_key.clone(),
        );

        tracing::info!(work_dir = %config.work_dir, "Server state initialized");

        Ok(Self {
            config: config.clone(),
            store: Arc::new(MemStore::seeded()),
            settings: Arc::new(settings),
            upsell: Arc::new(upsell),
            geocode: Arc::new(geocode),
        })
    }

    /// 构建自定义组件的状态
    ///
    /// 常用于测试场景 (临时目录 + mock upsell)
    pub fn with_components(
        config: Config,
        store: Arc<MemStore>,
        settings: Arc<SettingsStorage>,
        upsell: Arc<dyn UpsellProvider>,
        geocode: Arc<GeocodeClient>,
    ) -> Self {
        Self {
            config,
            store,
            settings,
            upsell,
            geocode,
        }
    }
}
