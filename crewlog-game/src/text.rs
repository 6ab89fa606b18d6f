//! Traditional-to-simplified fixups for service responses.
//!
//! The reasoning service may answer in either script. This is a fixed,
//! finite substitution table and nothing more.

/// Source/target pairs applied in order. Phrases precede their single-char parts.
pub const SIMPLIFIED_TABLE: &[(&str, &str)] = &[
    ("撒謊", "撒谎"),
    ("偽裝", "伪装"),
    ("內鬼", "内鬼"),
    ("邏輯", "逻辑"),
    ("潛在", "潜在"),
    ("約束", "约束"),
    ("檢測", "检测"),
    ("網絡", "网络"),
    ("與", "与"),
    ("實", "实"),
    ("說", "说"),
    ("連", "连"),
    ("換", "换"),
    ("擬", "拟"),
    ("備", "备"),
    ("確", "确"),
    ("據", "据"),
    ("誤", "误"),
];

#[must_use]
pub fn to_simplified(text: &str) -> String {
    SIMPLIFIED_TABLE
        .iter()
        .fold(text.to_string(), |acc, (from, to)| {
            if acc.contains(from) {
                acc.replace(from, to)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_listed_phrases_and_characters() {
        assert_eq!(to_simplified("Red 撒謊了"), "Red 撒谎了");
        assert_eq!(to_simplified("邏輯約束與實據"), "逻辑约束与实据");
        assert_eq!(to_simplified("網絡連接失敗"), "网络连接失敗");
    }

    #[test]
    fn leaves_unlisted_text_untouched() {
        assert_eq!(to_simplified("Blue vouched for Green"), "Blue vouched for Green");
        assert_eq!(to_simplified("發現"), "發現");
        assert_eq!(to_simplified(""), "");
    }
}
