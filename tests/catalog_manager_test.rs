// ==========================================
// 目录管理器集成测试
// ==========================================
// 覆盖: 建档/查找/评审重算/清单/折扣汇总/语言切换
// ==========================================


use product_catalog::{CatalogManager, Rating};
use rust_decimal_macros::dec;
use test_helpers::{create_test_config, discount_window_clock, noon_clock};

fn empty_manager(tag: &str) -> (tempfile::TempDir, CatalogManager) {
    let (root, config) = create_test_config();
    let manager = CatalogManager::with_clock(tag, config, Box::new(noon_clock()));
    (root, manager)
}

#[test]
fn test_review_recomputes_average_rating() {
    let (_root, mut pm) = empty_manager("en-GB");
    pm.create_standard(101, "Tea", dec!(1.99), Rating::NotRated);

    // [4, 2] ⇒ 均值 3.0 ⇒ 三星
    pm.review_by_id(101, Rating::FourStar, "Nice hot cup of tea");
    let updated = pm.review_by_id(101, Rating::TwoStar, "Rather weak tea").unwrap();
    assert_eq!(updated.rating, Rating::ThreeStar);
    assert_eq!(pm.find_by_id(101).unwrap().rating, Rating::ThreeStar);
}

#[test]
fn test_review_average_rounds_half_up() {
    let (_root, mut pm) = empty_manager("en-GB");
    pm.create_standard(102, "Coffee", dec!(1.99), Rating::NotRated);

    // [4, 5] ⇒ 均值 4.5 ⇒ 半进位五星
    pm.review_by_id(102, Rating::FourStar, "Good");
    let updated = pm.review_by_id(102, Rating::FiveStar, "Great").unwrap();
    assert_eq!(updated.rating, Rating::FiveStar);
}

#[test]
fn test_review_sequence_from_demo_data() {
    let (_root, mut pm) = empty_manager("en-GB");
    pm.create_standard(101, "Tea", dec!(1.99), Rating::NotRated);

    // [4,2,4,4,5,3] ⇒ 均值 22/6 ≈ 3.67 ⇒ 四星
    for (rating, comment) in [
        (Rating::FourStar, "Nice hot cup of tea"),
        (Rating::TwoStar, "Rather weak tea"),
        (Rating::FourStar, "Fine tea"),
        (Rating::FourStar, "Good tea"),
        (Rating::FiveStar, "Perfect tea"),
        (Rating::ThreeStar, "Just add some lemon"),
    ] {
        pm.review_by_id(101, rating, comment);
    }
    assert_eq!(pm.find_by_id(101).unwrap().rating, Rating::FourStar);
}

#[test]
fn test_create_on_existing_identity_is_noop() {
    let (_root, mut pm) = empty_manager("en-GB");
    pm.create_standard(101, "Tea", dec!(1.99), Rating::NotRated);
    pm.review_by_id(101, Rating::FourStar, "Nice hot cup of tea");

    // 同身份重复建档: 入参不同也不覆盖既有条目
    let returned = pm.create_standard(101, "Tea", dec!(9.99), Rating::FiveStar);

    // 返回值是本次构造的实例
    assert_eq!(returned.price, dec!(9.99));
    // 存储条目保持原价与既有平均评分
    let stored = pm.find_by_id(101).unwrap();
    assert_eq!(stored.price, dec!(1.99));
    assert_eq!(stored.rating, Rating::FourStar);
    assert_eq!(pm.len(), 1);
}

#[test]
fn test_find_by_id_on_empty_catalog() {
    let (_root, pm) = empty_manager("en-GB");
    assert!(pm.find_by_id(101).is_err());
}

#[test]
fn test_review_by_id_on_missing_id_returns_none() {
    let (_root, mut pm) = empty_manager("en-GB");
    assert!(pm.review_by_id(999, Rating::FourStar, "ghost").is_none());
}

#[test]
fn test_discount_totals_groups_by_stars() {
    let (_root, mut pm) = empty_manager("en-GB");
    // 两个四星 Standard: 折扣 0.20 + 0.25 = 0.45
    pm.create_standard(101, "Tea", dec!(1.99), Rating::FourStar);
    pm.create_standard(105, "Hot Chocolate", dec!(2.50), Rating::FourStar);

    let totals = pm.discount_totals();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("★★★★").map(String::as_str), Some("£0.45"));
}

#[test]
fn test_discount_totals_perishable_outside_window_is_zero() {
    let (_root, mut pm) = empty_manager("en-GB");
    pm.create_perishable(
        103,
        "Cake",
        dec!(3.99),
        Rating::FourStar,
        chrono::NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
    );

    // 正午时钟: Perishable 折扣为零
    let totals = pm.discount_totals();
    assert_eq!(totals.get("★★★★").map(String::as_str), Some("£0.00"));
}

#[test]
fn test_discount_totals_perishable_inside_window() {
    let (_root, config) = create_test_config();
    let mut pm = CatalogManager::with_clock("en-GB", config, Box::new(discount_window_clock()));
    pm.create_perishable(
        103,
        "Cake",
        dec!(3.99),
        Rating::FourStar,
        chrono::NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
    );

    let totals = pm.discount_totals();
    assert_eq!(totals.get("★★★★").map(String::as_str), Some("£0.40"));
}

#[test]
fn test_list_filters_and_sorts() {
    let (_root, mut pm) = empty_manager("en-GB");
    pm.create_standard(101, "Tea", dec!(1.99), Rating::TwoStar);
    pm.create_standard(102, "Coffee", dec!(1.99), Rating::FiveStar);
    pm.create_standard(105, "Hot Chocolate", dec!(2.50), Rating::FourStar);

    // 价格低于 2，按评分降序
    let listing = pm.list(|p| p.price < dec!(2), |a, b| b.rating.cmp(&a.rating));
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Coffee"));
    assert!(lines[1].contains("Tea"));
}

#[test]
fn test_unsupported_locale_falls_back() {
    let (_root, pm) = empty_manager("de-DE");
    assert_eq!(pm.locale(), "en-GB");
}

#[test]
fn test_change_locale_affects_currency() {
    let (_root, mut pm) = empty_manager("en-GB");
    pm.create_standard(101, "Tea", dec!(1.99), Rating::FourStar);

    pm.change_locale("fr-FR");
    let totals = pm.discount_totals();
    assert_eq!(totals.get("★★★★").map(String::as_str), Some("0,20\u{a0}€"));
}

#[test]
fn test_supported_locales() {
    let locales = CatalogManager::supported_locales();
    assert_eq!(locales.len(), 5);
    assert!(locales.contains(&"en-GB"));
    assert!(locales.contains(&"zh-CN"));
}
