// ==========================================
// 商品目录管理系统 - 目录层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 任何错误都不致命 —— 在操作边界转为
//       日志 + 无结果返回 / 状态保持不变
// ==========================================

use thiserror::Error;

/// 目录层错误类型
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 查找错误 =====
    #[error("商品未找到: id={0}")]
    ProductNotFound(i32),

    // ===== 快照错误 =====
    #[error("快照文件不存在")]
    RestoreNotFound,

    #[error("快照编码失败: {0}")]
    SnapshotEncode(String),

    #[error("快照解码失败: {0}")]
    SnapshotDecode(String),

    // ===== I/O 错误 =====
    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
