// ==========================================
// 商品目录管理系统 - 目录层
// ==========================================
// 职责: 目录存储、管理操作、批量装载、快照
// 红线: 目录映射不对外暴露可变引用，
//       一切变更经 CatalogManager 操作完成
// ==========================================

pub mod error;
pub mod manager;
pub mod store;

// 重导出核心类型
pub use error::CatalogError;
pub use manager::CatalogManager;
pub use store::CatalogStore;
