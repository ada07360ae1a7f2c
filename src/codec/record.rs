// ==========================================
// 商品目录管理系统 - 分隔记录编解码
// ==========================================
// 行格式:
//   商品: TYPE|ID|NAME|PRICE|RATING[|BESTBEFORE]
//         TYPE = D (Standard/饮品) 或 F (Perishable/食品)
//         BESTBEFORE 仅 F 类携带，ISO-8601 日期
//   评论: RATING|COMMENT
// 解析: csv ReaderBuilder（竖线分隔，无表头，关闭引号处理）
// ==========================================

use crate::codec::error::CodecError;
use crate::domain::{Product, ProductKind, Rating, Review};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use std::str::FromStr;

// 商品类型标记
const TAG_STANDARD: &str = "D";
const TAG_PERISHABLE: &str = "F";

// ==========================================
// 解码
// ==========================================

/// 解码一行商品记录
pub fn decode_product(line: &str) -> Result<Product, CodecError> {
    let fields = split_line(line)?;

    let tag = fields
        .get(0)
        .map(|s| s.trim())
        .ok_or(CodecError::EmptyRecord)?;

    match tag {
        TAG_STANDARD => {
            expect_fields(&fields, 5)?;
            let (id, name, price, rating) = parse_common(&fields)?;
            Ok(Product::standard(id, name, price, rating))
        }
        TAG_PERISHABLE => {
            expect_fields(&fields, 6)?;
            let (id, name, price, rating) = parse_common(&fields)?;
            let raw_date = fields[5].trim();
            let best_before = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
                .map_err(|_| CodecError::InvalidDate(raw_date.to_string()))?;
            Ok(Product::perishable(id, name, price, rating, best_before))
        }
        other => Err(CodecError::UnknownTag(other.to_string())),
    }
}

/// 解码一行评论记录
pub fn decode_review(line: &str) -> Result<Review, CodecError> {
    let fields = split_line(line)?;
    expect_fields(&fields, 2)?;

    let rating = parse_rating(fields[0].trim())?;
    Ok(Review::new(rating, fields[1].trim()))
}

// ==========================================
// 编码
// ==========================================

/// 编码商品为记录行
pub fn encode_product(product: &Product) -> String {
    match product.kind {
        ProductKind::Standard => format!(
            "{}|{}|{}|{}|{}",
            TAG_STANDARD,
            product.id,
            product.name,
            product.price,
            product.rating.ordinal()
        ),
        ProductKind::Perishable { best_before } => format!(
            "{}|{}|{}|{}|{}|{}",
            TAG_PERISHABLE,
            product.id,
            product.name,
            product.price,
            product.rating.ordinal(),
            best_before.format("%Y-%m-%d")
        ),
    }
}

/// 编码评论为记录行
pub fn encode_review(review: &Review) -> String {
    format!("{}|{}", review.rating.ordinal(), review.comment)
}

// ==========================================
// 内部辅助
// ==========================================

fn split_line(line: &str) -> Result<Vec<String>, CodecError> {
    if line.trim().is_empty() {
        return Err(CodecError::EmptyRecord);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true) // 字段数量在上层校验
        .quoting(false)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Err(CodecError::EmptyRecord);
    }

    Ok(record.iter().map(|f| f.to_string()).collect())
}

fn expect_fields(fields: &[String], expected: usize) -> Result<(), CodecError> {
    if fields.len() != expected {
        return Err(CodecError::FieldCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(())
}

/// 公共字段: id, name, price, rating（下标 1-4）
fn parse_common(fields: &[String]) -> Result<(i32, String, Decimal, Rating), CodecError> {
    let raw_id = fields[1].trim();
    let id = raw_id.parse::<i32>().map_err(|_| CodecError::InvalidNumber {
        field: "id",
        value: raw_id.to_string(),
    })?;

    let name = fields[2].trim().to_string();

    let raw_price = fields[3].trim();
    let price = Decimal::from_str(raw_price)
        .map_err(|_| CodecError::InvalidPrice(raw_price.to_string()))?;

    let rating = parse_rating(fields[4].trim())?;

    Ok((id, name, price, rating))
}

/// 序数非数字为错误；数字超范围按 Rating::from_ordinal 静默回退
fn parse_rating(raw: &str) -> Result<Rating, CodecError> {
    let ordinal = raw.parse::<i64>().map_err(|_| CodecError::InvalidNumber {
        field: "rating",
        value: raw.to_string(),
    })?;
    Ok(Rating::from_ordinal(ordinal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_standard_product() {
        let p = decode_product("D|101|Tea|1.99|4").unwrap();
        assert_eq!(p.id, 101);
        assert_eq!(p.name, "Tea");
        assert_eq!(p.price, dec!(1.99));
        assert_eq!(p.rating, Rating::FourStar);
        assert_eq!(p.kind, ProductKind::Standard);
    }

    #[test]
    fn test_decode_perishable_product() {
        let p = decode_product("F|103|Cake|3.99|0|2026-08-25").unwrap();
        assert_eq!(p.id, 103);
        assert_eq!(
            p.best_before(),
            NaiveDate::from_ymd_opt(2026, 8, 25)
        );
    }

    #[test]
    fn test_product_round_trip() {
        let tea = Product::standard(101, "Tea", dec!(1.99), Rating::FourStar);
        let decoded = decode_product(&encode_product(&tea)).unwrap();
        assert_eq!(decoded.id, tea.id);
        assert_eq!(decoded.name, tea.name);
        assert_eq!(decoded.price, tea.price);
        assert_eq!(decoded.rating, tea.rating);
        assert_eq!(decoded.kind, tea.kind);

        let cake = Product::perishable(
            103,
            "Cake",
            dec!(3.99),
            Rating::FiveStar,
            NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
        );
        let decoded = decode_product(&encode_product(&cake)).unwrap();
        assert_eq!(decoded.kind, cake.kind);
        assert_eq!(decoded.price, cake.price);
    }

    #[test]
    fn test_review_round_trip() {
        let review = Review::new(Rating::TwoStar, "Rather weak tea");
        let decoded = decode_review(&encode_review(&review)).unwrap();
        assert_eq!(decoded, review);
    }

    #[test]
    fn test_decode_rejects_missing_price() {
        // 价格字段非数值 → 无记录，不 panic
        assert!(matches!(
            decode_product("D|101|Tea|cheap|4"),
            Err(CodecError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        assert!(matches!(
            decode_product("D|101|Tea"),
            Err(CodecError::FieldCount { .. })
        ));
        // F 类缺日期字段
        assert!(matches!(
            decode_product("F|103|Cake|3.99|0"),
            Err(CodecError::FieldCount { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_tag() {
        assert!(matches!(
            decode_product("X|101|Tea|1.99|4"),
            Err(CodecError::UnknownTag(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_date() {
        assert!(matches!(
            decode_product("F|103|Cake|3.99|0|tomorrow"),
            Err(CodecError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_decode_clamps_out_of_range_rating() {
        // 数字超范围回退为 NotRated（与 from_ordinal 一致）
        let p = decode_product("D|101|Tea|1.99|9").unwrap();
        assert_eq!(p.rating, Rating::NotRated);
    }

    #[test]
    fn test_decode_rejects_empty_line() {
        assert!(matches!(decode_product("  "), Err(CodecError::EmptyRecord)));
        assert!(matches!(decode_review(""), Err(CodecError::EmptyRecord)));
    }
}
