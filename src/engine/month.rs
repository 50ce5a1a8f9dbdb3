// ==========================================
// 门店补货需求计算服务 - 计算月份判定
// ==========================================
// 规则: 请求指定月份(非空白) → 首字母大写、其余小写
//       未指定 → 当前日历月的英文全称
// 说明: 固定大小写转换, 不做拼写纠错
// ==========================================

use chrono::{Datelike, Month, NaiveDate};

/// 月份名称大小写归一（"DECEMBER" → "December"）
///
/// 空白输入返回 None
pub fn normalize_month(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;

    let mut normalized: String = first.to_uppercase().collect();
    normalized.push_str(&chars.as_str().to_lowercase());
    Some(normalized)
}

/// 指定日期所在月份的英文全称
pub fn month_name(date: NaiveDate) -> &'static str {
    match Month::try_from(date.month() as u8) {
        Ok(month) => month.name(),
        // month() 恒在 1..=12
        Err(_) => "January",
    }
}

/// 判定本次计算使用的月份
pub fn resolve_month(month_override: Option<&str>, today: NaiveDate) -> String {
    month_override
        .and_then(normalize_month)
        .unwrap_or_else(|| month_name(today).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_month_case() {
        assert_eq!(normalize_month("DECEMBER").as_deref(), Some("December"));
        assert_eq!(normalize_month("may").as_deref(), Some("May"));
        assert_eq!(normalize_month("  jUNe ").as_deref(), Some("June"));
    }

    #[test]
    fn test_normalize_month_blank() {
        assert_eq!(normalize_month(""), None);
        assert_eq!(normalize_month("   "), None);
    }

    #[test]
    fn test_normalize_month_no_spelling_fix() {
        assert_eq!(normalize_month("decmber").as_deref(), Some("Decmber"));
    }

    #[test]
    fn test_resolve_month_defaults_to_current() {
        assert_eq!(resolve_month(None, date(2024, 12, 5)), "December");
        assert_eq!(resolve_month(Some("  "), date(2024, 3, 1)), "March");
        assert_eq!(resolve_month(Some("july"), date(2024, 3, 1)), "July");
    }

    #[test]
    fn test_month_name_all_months() {
        let names: Vec<&str> = (1..=12).map(|m| month_name(date(2025, m, 1))).collect();
        assert_eq!(names[0], "January");
        assert_eq!(names[4], "May");
        assert_eq!(names[11], "December");
    }
}
