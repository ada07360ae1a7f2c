// ==========================================
// 商品目录管理系统 - 商品实体
// ==========================================
// 红线: 实体不可变，apply_rating 产生新实例
// 红线: 身份相等仅由 (id, name) 决定
//       价格/评分/品类不参与相等与哈希
// 品类: Standard（饮品类，无保质期）
//       Perishable（食品类，带保质期与折扣时段）
// ==========================================

use crate::clock::Clock;
use crate::domain::types::Rating;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// 统一折扣率（10%）
pub const DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

// 折扣时段 [17:30, 18:30)，仅对 Perishable 生效
const DISCOUNT_WINDOW_START: (u32, u32) = (17, 30);
const DISCOUNT_WINDOW_END: (u32, u32) = (18, 30);

// ==========================================
// ProductKind - 商品品类
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    /// 非易腐商品（饮品类）：全天折扣
    Standard,
    /// 易腐商品（食品类）：带保质期，仅折扣时段内折扣
    Perishable { best_before: NaiveDate },
}

// ==========================================
// Product - 商品实体
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,          // 商品编号
    pub name: String,     // 商品名称
    pub price: Decimal,   // 单价（定点小数）
    pub rating: Rating,   // 当前平均评分
    pub kind: ProductKind, // 品类与品类私有字段
}

impl Product {
    pub fn standard(id: i32, name: impl Into<String>, price: Decimal, rating: Rating) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            rating,
            kind: ProductKind::Standard,
        }
    }

    pub fn perishable(
        id: i32,
        name: impl Into<String>,
        price: Decimal,
        rating: Rating,
        best_before: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            rating,
            kind: ProductKind::Perishable { best_before },
        }
    }

    /// 以新评分生成新实例，其余字段不变（不修改自身）
    pub fn apply_rating(&self, rating: Rating) -> Product {
        Product {
            rating,
            ..self.clone()
        }
    }

    /// 保质期（Standard 无保质期）
    pub fn best_before(&self) -> Option<NaiveDate> {
        match self.kind {
            ProductKind::Standard => None,
            ProductKind::Perishable { best_before } => Some(best_before),
        }
    }

    /// 当前折扣额
    ///
    /// - Standard: 恒为 price * 10%，半进位保留两位小数
    /// - Perishable: 同上，但仅当注入时钟处于 [17:30, 18:30) 时段内，否则为零
    pub fn discount(&self, clock: &dyn Clock) -> Decimal {
        let base = (self.price * DISCOUNT_RATE)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        match self.kind {
            ProductKind::Standard => base,
            ProductKind::Perishable { .. } => {
                if in_discount_window(clock.now_time()) {
                    base
                } else {
                    Decimal::ZERO
                }
            }
        }
    }
}

fn in_discount_window(now: NaiveTime) -> bool {
    let (sh, sm) = DISCOUNT_WINDOW_START;
    let (eh, em) = DISCOUNT_WINDOW_END;
    let start = NaiveTime::from_hms_opt(sh, sm, 0).unwrap_or(NaiveTime::MIN);
    let end = NaiveTime::from_hms_opt(eh, em, 0).unwrap_or(NaiveTime::MIN);
    now >= start && now < end
}

// ==========================================
// 身份相等: 仅 (id, name)
// ==========================================
// 同 id/name 不同价格或品类的商品视为同一目录键，
// 重复创建时与既有条目碰撞（insert-if-absent 语义依赖于此）
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use rust_decimal_macros::dec;

    fn at(h: u32, m: u32) -> FixedClock {
        FixedClock::at(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn test_standard_discount_independent_of_time() {
        let tea = Product::standard(101, "Tea", dec!(1.99), Rating::NotRated);
        assert_eq!(tea.discount(&at(3, 0)), dec!(0.20));
        assert_eq!(tea.discount(&at(17, 45)), dec!(0.20));
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // 2.50 * 0.10 = 0.25（精确），1.99 * 0.10 = 0.199 -> 0.20
        let p = Product::standard(1, "A", dec!(1.99), Rating::NotRated);
        assert_eq!(p.discount(&at(12, 0)), dec!(0.20));
        let q = Product::standard(2, "B", dec!(0.05), Rating::NotRated);
        assert_eq!(q.discount(&at(12, 0)), dec!(0.01)); // 0.005 半进位
    }

    #[test]
    fn test_perishable_discount_window() {
        let cake = Product::perishable(
            103,
            "Cake",
            dec!(3.99),
            Rating::NotRated,
            NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
        );
        // 时段内（含下界）
        assert_eq!(cake.discount(&at(17, 30)), dec!(0.40));
        assert_eq!(cake.discount(&at(18, 0)), dec!(0.40));
        // 时段外（上界不含）
        assert_eq!(cake.discount(&at(18, 30)), Decimal::ZERO);
        assert_eq!(cake.discount(&at(12, 0)), Decimal::ZERO);
    }

    #[test]
    fn test_apply_rating_returns_new_instance() {
        let tea = Product::standard(101, "Tea", dec!(1.99), Rating::NotRated);
        let rated = tea.apply_rating(Rating::FourStar);
        assert_eq!(tea.rating, Rating::NotRated);
        assert_eq!(rated.rating, Rating::FourStar);
        assert_eq!(rated.price, tea.price);
        // 身份不变
        assert_eq!(tea, rated);
    }

    #[test]
    fn test_identity_ignores_price_rating_kind() {
        let a = Product::standard(101, "Tea", dec!(1.99), Rating::NotRated);
        let b = Product::perishable(
            101,
            "Tea",
            dec!(9.99),
            Rating::FiveStar,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        assert_eq!(a, b);
        let c = Product::standard(102, "Tea", dec!(1.99), Rating::NotRated);
        assert_ne!(a, c);
    }

    #[test]
    fn test_best_before() {
        let tea = Product::standard(101, "Tea", dec!(1.99), Rating::NotRated);
        assert_eq!(tea.best_before(), None);
        let d = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let cake = Product::perishable(103, "Cake", dec!(3.99), Rating::NotRated, d);
        assert_eq!(cake.best_before(), Some(d));
    }
}
