// ==========================================
// 商品目录管理系统 - 核心库
// ==========================================
// 技术栈: Rust + rust-i18n + tracing
// 系统定位: 单进程目录管理（无并发契约）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en-GB");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 编解码层 - 分隔文本记录
pub mod codec;

// 目录层 - 目录存储与管理
pub mod catalog;

// 配置层 - 目录路径与文件名模板
pub mod config;

// 格式化层 - 本地化输出
pub mod format;

// 时间源抽象
pub mod clock;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{Product, ProductKind, Rating, Review, DISCOUNT_RATE};

// 目录管理
pub use catalog::{CatalogError, CatalogManager, CatalogStore};

// 编解码
pub use codec::CodecError;

// 配置
pub use config::CatalogConfig;

// 格式化
pub use format::LocaleFormatter;

// 时间源
pub use clock::{Clock, FixedClock, SystemClock};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "商品目录管理系统";

// ==========================================
// 预编译检查
// ==========================================
