// ==========================================
// 商品目录管理系统 - 领域类型定义
// ==========================================
// 红线: 评分为等级制（0-5），不是评分制
// 序数: 0 = 未评分, 5 = 五星
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 评分等级 (Rating)
// ==========================================
// 顺序: NotRated < OneStar < ... < FiveStar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    NotRated, // 未评分
    OneStar,  // 一星
    TwoStar,  // 二星
    ThreeStar, // 三星
    FourStar, // 四星
    FiveStar, // 五星
}

impl Rating {
    /// 评分序数（0-5）
    pub fn ordinal(self) -> i64 {
        match self {
            Rating::NotRated => 0,
            Rating::OneStar => 1,
            Rating::TwoStar => 2,
            Rating::ThreeStar => 3,
            Rating::FourStar => 4,
            Rating::FiveStar => 5,
        }
    }

    /// 由序数换算评分
    ///
    /// 超出 [0, 5] 的值静默回退为 NotRated（不报错）
    pub fn from_ordinal(n: i64) -> Rating {
        match n {
            1 => Rating::OneStar,
            2 => Rating::TwoStar,
            3 => Rating::ThreeStar,
            4 => Rating::FourStar,
            5 => Rating::FiveStar,
            _ => Rating::NotRated,
        }
    }

    /// 星形显示串（NotRated 为空串）
    ///
    /// 同时用作折扣汇总的分组键
    pub fn stars(self) -> String {
        "★".repeat(self.ordinal() as usize)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stars())
    }
}
