// ==========================================
// 商品目录管理系统 - 记录编解码层
// ==========================================
// 职责: 商品/评论与竖线分隔文本行互转
// 红线: 解码容错 —— 坏行返回错误由调用方记日志跳过，
//       绝不让单行错误中断批量装载
// ==========================================

pub mod error;
pub mod record;

// 重导出核心类型
pub use error::CodecError;
pub use record::{decode_product, decode_review, encode_product, encode_review};
