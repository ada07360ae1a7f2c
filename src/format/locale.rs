// ==========================================
// 商品目录管理系统 - 本地化格式器
// ==========================================
// 职责: 货币/日期格式规则 + 消息模板渲染
// 模板: 经 rust-i18n 按语言标签查取（消息键 → 模板）
// 回退: 不支持的语言标签回退 en-GB
// ==========================================

use crate::domain::{Product, Review};
use crate::i18n;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// 受支持的语言标签全集
pub const SUPPORTED_LOCALES: [&str; 5] = ["en-GB", "en-US", "fr-FR", "ru-RU", "zh-CN"];

/// 基线语言标签（回退目标）
pub const FALLBACK_LOCALE: &str = "en-GB";

// ==========================================
// 每语言的货币/日期规则
// ==========================================
// 说明: 示例库中无 CLDR 货币格式化 crate，
//       规则表内置（见 DESIGN.md 决策记录）
#[derive(Debug)]
struct LocaleRules {
    tag: &'static str,
    currency_symbol: &'static str,
    symbol_first: bool,       // 货币符号前置还是后置
    decimal_sep: char,        // 小数分隔符
    group_sep: &'static str,  // 千位分隔符
    date_format: &'static str, // chrono 短日期格式
}

const LOCALE_RULES: [LocaleRules; 5] = [
    LocaleRules {
        tag: "en-GB",
        currency_symbol: "£",
        symbol_first: true,
        decimal_sep: '.',
        group_sep: ",",
        date_format: "%d/%m/%Y",
    },
    LocaleRules {
        tag: "en-US",
        currency_symbol: "$",
        symbol_first: true,
        decimal_sep: '.',
        group_sep: ",",
        date_format: "%m/%d/%y",
    },
    LocaleRules {
        tag: "fr-FR",
        currency_symbol: "€",
        symbol_first: false,
        decimal_sep: ',',
        group_sep: "\u{202f}",
        date_format: "%d/%m/%Y",
    },
    LocaleRules {
        tag: "ru-RU",
        currency_symbol: "₽",
        symbol_first: false,
        decimal_sep: ',',
        group_sep: "\u{202f}",
        date_format: "%d.%m.%Y",
    },
    LocaleRules {
        tag: "zh-CN",
        currency_symbol: "￥",
        symbol_first: true,
        decimal_sep: '.',
        group_sep: ",",
        date_format: "%Y/%m/%d",
    },
];

// ==========================================
// LocaleFormatter - 本地化格式器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct LocaleFormatter {
    rules: &'static LocaleRules,
}

impl LocaleFormatter {
    /// 按语言标签选取格式器，不支持的标签回退 en-GB
    pub fn for_tag(tag: &str) -> Self {
        let rules = LOCALE_RULES
            .iter()
            .find(|r| r.tag == tag)
            .unwrap_or(&LOCALE_RULES[0]);
        Self { rules }
    }

    /// 当前语言标签
    pub fn tag(&self) -> &'static str {
        self.rules.tag
    }

    /// 渲染商品行
    ///
    /// Standard 无保质期，使用不带日期的模板
    pub fn format_product(&self, product: &Product) -> String {
        let price = self.format_currency(product.price);
        let stars = product.rating.stars();
        match product.best_before() {
            Some(date) => i18n::text_with_args(
                self.rules.tag,
                "format.product_dated",
                &[
                    ("name", &product.name),
                    ("price", &price),
                    ("stars", &stars),
                    ("best_before", &self.format_date(date)),
                ],
            ),
            None => i18n::text_with_args(
                self.rules.tag,
                "format.product",
                &[
                    ("name", &product.name),
                    ("price", &price),
                    ("stars", &stars),
                ],
            ),
        }
    }

    /// 渲染评论行
    pub fn format_review(&self, review: &Review) -> String {
        i18n::text_with_args(
            self.rules.tag,
            "format.review",
            &[
                ("stars", &review.rating.stars()),
                ("comment", &review.comment),
            ],
        )
    }

    /// 按消息键查取本地化文本
    pub fn text(&self, key: &str) -> String {
        i18n::text(self.rules.tag, key)
    }

    /// 本地化货币串（两位小数，半进位）
    pub fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let plain = format!("{:.2}", rounded);
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let grouped = group_digits(int_part, self.rules.group_sep);
        let sign = if amount.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let number = format!("{}{}{}{}", sign, grouped, self.rules.decimal_sep, frac_part);

        if self.rules.symbol_first {
            format!("{}{}", self.rules.currency_symbol, number)
        } else {
            format!("{}\u{a0}{}", number, self.rules.currency_symbol)
        }
    }

    /// 本地化短日期串
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.rules.date_format).to_string()
    }
}

/// 自右向左每三位插入千位分隔符
fn group_digits(digits: &str, sep: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(*c);
    }
    out
}
