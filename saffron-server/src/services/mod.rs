//! 外部服务客户端
//!
//! - [`upsell`] - 加购推荐服务 (失败时返回固定 fallback)
//! - [`geocode`] - 地址查询服务 (best-effort 解析)

pub mod geocode;
pub mod upsell;

pub use geocode::{AddressCandidate, GeocodeClient};
pub use upsell::{HttpUpsellClient, UpsellProvider, UpsellRequest, UpsellSuggestion};
