//! Catalogue Context - Value Objects

use super::CatalogueError;

/// 书籍唯一标识（数据集中为不透明字符串）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogueError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogueError::InvalidBookId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 检索字符 - 单个 ASCII 字母或数字
///
/// 不区分大小写：内部统一存为小写，展示时转为大写
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchChar(char);

impl SearchChar {
    pub fn new(c: char) -> Result<Self, CatalogueError> {
        if !c.is_ascii_alphanumeric() {
            return Err(CatalogueError::InvalidSearchChar(c.to_string()));
        }
        Ok(Self(c.to_ascii_lowercase()))
    }

    /// 从路径片段解析，必须恰好一个字符
    pub fn parse(raw: &str) -> Result<Self, CatalogueError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(CatalogueError::InvalidSearchChar(raw.to_string())),
        }
    }

    /// 查询用的小写形式
    pub fn as_char(&self) -> char {
        self.0
    }

    /// 展示用的大写形式
    pub fn display_char(&self) -> char {
        self.0.to_ascii_uppercase()
    }

    /// `LIKE` 前缀模式；字符已限定为字母数字，无需转义通配符
    pub fn like_pattern(&self) -> String {
        format!("{}%", self.0)
    }

    /// 判断标题是否以该字符开头（不区分大小写）
    pub fn matches(&self, title: &str) -> bool {
        title
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase() == self.0)
            .unwrap_or(false)
    }

    /// 首页导航：A-Z 字母
    pub fn letters() -> impl Iterator<Item = SearchChar> {
        ('a'..='z').map(SearchChar)
    }

    /// 首页导航：0-9 数字
    pub fn digits() -> impl Iterator<Item = SearchChar> {
        ('0'..='9').map(SearchChar)
    }
}

impl std::fmt::Display for SearchChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 页码（从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub fn new(page: u32) -> Result<Self, CatalogueError> {
        if page == 0 {
            return Err(CatalogueError::InvalidPage("0".to_string()));
        }
        Ok(Self(page))
    }

    pub fn parse(raw: &str) -> Result<Self, CatalogueError> {
        let page = raw
            .parse::<u32>()
            .map_err(|_| CatalogueError::InvalidPage(raw.to_string()))?;
        Self::new(page)
    }

    pub fn first() -> Self {
        Self(1)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_char_is_case_insensitive() {
        let upper = SearchChar::parse("A").unwrap();
        let lower = SearchChar::parse("a").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.as_char(), 'a');
        assert_eq!(upper.display_char(), 'A');
        assert_eq!(upper.like_pattern(), "a%");
    }

    #[test]
    fn test_search_char_accepts_digits() {
        let c = SearchChar::parse("7").unwrap();
        assert_eq!(c.as_char(), '7');
        assert_eq!(c.display_char(), '7');
    }

    #[test]
    fn test_search_char_rejects_invalid_input() {
        assert!(SearchChar::parse("").is_err());
        assert!(SearchChar::parse("ab").is_err());
        assert!(SearchChar::parse("%").is_err());
        assert!(SearchChar::parse("_").is_err());
        assert!(SearchChar::parse("é").is_err());
    }

    #[test]
    fn test_search_char_matches_title() {
        let c = SearchChar::parse("t").unwrap();
        assert!(c.matches("The Hobbit"));
        assert!(c.matches("tender is the night"));
        assert!(!c.matches("A Tale of Two Cities"));
        assert!(!c.matches(""));
    }

    #[test]
    fn test_navigation_entries() {
        let letters: String = SearchChar::letters().map(|c| c.display_char()).collect();
        let digits: String = SearchChar::digits().map(|c| c.display_char()).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(digits, "0123456789");
    }

    #[test]
    fn test_page_number_parse() {
        assert_eq!(PageNumber::parse("3").unwrap().get(), 3);
        assert!(PageNumber::parse("0").is_err());
        assert!(PageNumber::parse("-1").is_err());
        assert!(PageNumber::parse("abc").is_err());
    }

    #[test]
    fn test_book_id_rejects_blank() {
        assert!(BookId::new("  ").is_err());
        assert_eq!(BookId::new("c170e0ac").unwrap().as_str(), "c170e0ac");
    }
}
