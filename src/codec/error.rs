// ==========================================
// 商品目录管理系统 - 编解码错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 记录编解码错误
///
/// 所有解码错误在装载边界被捕获：记 warning 日志后跳过该行
#[derive(Error, Debug)]
pub enum CodecError {
    // ===== 结构错误 =====
    #[error("空记录行")]
    EmptyRecord,

    #[error("字段数量错误: 期望 {expected}，实际 {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("未知商品类型标记: {0}（仅支持 D/F）")]
    UnknownTag(String),

    // ===== 字段错误 =====
    #[error("数值字段解析失败 (字段 {field}): {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("价格解析失败: {0}")]
    InvalidPrice(String),

    #[error("日期解析失败: 期望 ISO-8601，实际 {0}")]
    InvalidDate(String),

    // ===== 底层错误 =====
    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),
}
