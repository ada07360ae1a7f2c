// ==========================================
// 商品目录管理系统 - 领域模型层
// ==========================================
// 职责: 定义商品实体、评分类型、评论值对象
// 红线: 实体不可变，评分变更产生新实例
// 红线: 不含文件访问逻辑，不含格式化逻辑
// ==========================================

pub mod product;
pub mod review;
pub mod types;

// 重导出核心类型
pub use product::{Product, ProductKind, DISCOUNT_RATE};
pub use review::Review;
pub use types::Rating;
