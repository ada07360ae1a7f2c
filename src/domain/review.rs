// ==========================================
// 商品目录管理系统 - 评论值对象
// ==========================================
// 红线: 不可变，创建后只读
// 排序: 报表按评分升序（排序点使用 sort_by_key）
// ==========================================

use crate::domain::types::Rating;
use serde::{Deserialize, Serialize};

/// 商品评论
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub rating: Rating,  // 评分
    pub comment: String, // 评论正文
}

impl Review {
    pub fn new(rating: Rating, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }
}
