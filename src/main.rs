// ==========================================
// 商品目录管理系统 - 演示入口
// ==========================================
// 职责: 薄胶水 —— 装配示例数据并演示目录操作
// ==========================================

use chrono::{Duration, Local};
use product_catalog::{logging, CatalogConfig, CatalogManager, Rating};
use rust_decimal::Decimal;

fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", product_catalog::APP_NAME);
    tracing::info!("系统版本: {}", product_catalog::VERSION);
    tracing::info!("==================================================");

    let config = CatalogConfig::default_dirs();
    tracing::info!("数据目录: {}", config.data_dir.display());

    let mut pm = CatalogManager::new("en-GB", config);

    // ===== 示例数据 =====
    let price = |s: &str| s.parse::<Decimal>().unwrap_or(Decimal::ZERO);
    let today = Local::now().date_naive();

    pm.create_standard(101, "Tea", price("1.99"), Rating::NotRated);
    pm.review_by_id(101, Rating::FourStar, "Nice hot cup of tea");
    pm.review_by_id(101, Rating::TwoStar, "Rather weak tea");
    pm.review_by_id(101, Rating::FourStar, "Fine tea");
    pm.review_by_id(101, Rating::FourStar, "Good tea");
    pm.review_by_id(101, Rating::FiveStar, "Perfect tea");
    pm.review_by_id(101, Rating::ThreeStar, "Just add some lemon");

    pm.create_standard(102, "Coffee", price("1.99"), Rating::NotRated);
    pm.review_by_id(102, Rating::ThreeStar, "Coffee was ok");
    pm.review_by_id(102, Rating::OneStar, "Where is the milk?!");
    pm.review_by_id(102, Rating::FiveStar, "It's perfect with ten spoons of sugar!");

    pm.create_perishable(103, "Cake", price("3.99"), Rating::NotRated, today + Duration::days(2));
    pm.review_by_id(103, Rating::FiveStar, "Very nice cake");
    pm.review_by_id(103, Rating::FourStar, "It good, but I've expected more chocolate");
    pm.review_by_id(103, Rating::FiveStar, "This cake is perfect!");

    pm.create_perishable(104, "Cookie", price("2.99"), Rating::NotRated, today);
    pm.review_by_id(104, Rating::ThreeStar, "Just another cookie");
    pm.review_by_id(104, Rating::ThreeStar, "Ok");

    pm.create_standard(105, "Hot Chocolate", price("2.50"), Rating::NotRated);
    pm.review_by_id(105, Rating::FourStar, "Tasty!");
    pm.review_by_id(105, Rating::FourStar, "Not bad at all");

    pm.write_report_by_id(103);

    // 价格低于 2 的商品，按评分降序
    let listing = pm.list(
        |p| p.price < price("2"),
        |a, b| b.rating.cmp(&a.rating),
    );
    println!("{}", listing);

    // 按星级分组的折扣总额
    for (stars, total) in pm.discount_totals() {
        println!("{}\t{}", stars, total);
    }
}
