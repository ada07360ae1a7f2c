// ==========================================
// 商品目录管理系统 - 格式化层
// ==========================================
// 职责: 商品/评论的本地化文本渲染
// ==========================================

pub mod locale;

// 重导出核心类型
pub use locale::{LocaleFormatter, FALLBACK_LOCALE, SUPPORTED_LOCALES};
