// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持 en-GB（默认回退）/ en-US / fr-FR / ru-RU / zh-CN
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 语言标签由调用方显式传入，不修改全局 locale
// ==========================================

/// 翻译消息（无参数）
///
/// # 参数
/// - locale: 语言标签（如 "en-GB"、"zh-CN"）
/// - key: 消息键
///
/// # 示例
/// ```no_run
/// use product_catalog::i18n::text;
/// let msg = text("en-GB", "format.no_reviews");
/// ```
pub fn text(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use product_catalog::i18n::text_with_args;
/// let msg = text_with_args("en-GB", "format.review", &[("stars", "★★★"), ("comment", "Fine tea")]);
/// ```
pub fn text_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key, locale = locale).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_simple() {
        assert_eq!(text("en-GB", "format.no_reviews"), "Not reviewed yet");
        assert_eq!(text("fr-FR", "format.no_reviews"), "Pas encore d'avis");
        assert_eq!(text("zh-CN", "format.no_reviews"), "暂无评论");
    }

    #[test]
    fn test_text_fallback_to_en_gb() {
        // 不支持的语言标签回退到 en-GB
        assert_eq!(text("de-DE", "format.no_reviews"), "Not reviewed yet");
    }

    #[test]
    fn test_text_with_args() {
        let msg = text_with_args(
            "en-GB",
            "format.review",
            &[("stars", "★★★"), ("comment", "Fine tea")],
        );
        assert!(msg.contains("★★★"));
        assert!(msg.contains("Fine tea"));
    }
}
