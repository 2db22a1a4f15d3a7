//! Catalogue Context - Pagination
//!
//! 按首字符分页浏览的元数据计算

use super::{PageNumber, SearchChar};

/// 每页条目数
pub const PAGE_SIZE: u32 = 10;

/// 分页描述
///
/// 不变量:
/// - offset = (page - 1) * PAGE_SIZE
/// - total_pages = ceil(total_count / PAGE_SIZE)
/// - has_prev_page 当且仅当 page > 1
/// - has_next_page 当且仅当 page < total_pages（total_pages 为 0 时恒为 false）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub search_char: SearchChar,
    pub page: u32,
    pub offset: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl PageDescriptor {
    /// 查询前即可确定的偏移量
    pub fn offset_for(page: PageNumber) -> u64 {
        u64::from(page.get() - 1) * u64::from(PAGE_SIZE)
    }

    pub fn total_pages_for(total_count: u64) -> u64 {
        total_count.div_ceil(u64::from(PAGE_SIZE))
    }

    /// 根据总数计算分页信息
    ///
    /// 超出范围的页码不报错，由调用方返回空列表
    pub fn compute(search_char: SearchChar, page: PageNumber, total_count: u64) -> Self {
        let total_pages = Self::total_pages_for(total_count);
        let current = u64::from(page.get());

        Self {
            search_char,
            page: page.get(),
            offset: Self::offset_for(page),
            total_count,
            total_pages,
            has_prev_page: current > 1,
            has_next_page: total_pages > 0 && current < total_pages,
        }
    }

    /// 页码是否超出总页数
    pub fn is_out_of_range(&self) -> bool {
        u64::from(self.page) > self.total_pages
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev_page.then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next_page.then(|| self.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(page: u32, total: u64) -> PageDescriptor {
        PageDescriptor::compute(
            SearchChar::parse("a").unwrap(),
            PageNumber::new(page).unwrap(),
            total,
        )
    }

    #[test]
    fn test_offset_is_page_minus_one_times_size() {
        for page in 1..=50 {
            let d = descriptor(page, 1000);
            assert_eq!(d.offset, u64::from(page - 1) * 10);
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(descriptor(1, 0).total_pages, 0);
        assert_eq!(descriptor(1, 1).total_pages, 1);
        assert_eq!(descriptor(1, 10).total_pages, 1);
        assert_eq!(descriptor(1, 11).total_pages, 2);
        assert_eq!(descriptor(1, 15).total_pages, 2);
    }

    #[test]
    fn test_first_page_of_fifteen() {
        let d = descriptor(1, 15);
        assert!(!d.has_prev_page);
        assert!(d.has_next_page);
        assert_eq!(d.next_page(), Some(2));
        assert_eq!(d.prev_page(), None);
    }

    #[test]
    fn test_last_page_of_fifteen() {
        let d = descriptor(2, 15);
        assert!(d.has_prev_page);
        assert!(!d.has_next_page);
        assert_eq!(d.offset, 10);
        assert!(!d.is_out_of_range());
    }

    #[test]
    fn test_prev_flag_iff_not_first_page() {
        for page in 1..=5 {
            assert_eq!(descriptor(page, 45).has_prev_page, page != 1);
        }
    }

    #[test]
    fn test_next_flag_false_when_no_results() {
        let d = descriptor(1, 0);
        assert!(!d.has_next_page);
        assert!(!d.has_prev_page);
        assert!(d.is_out_of_range());
    }

    #[test]
    fn test_out_of_range_page() {
        let d = descriptor(7, 15);
        assert!(d.is_out_of_range());
        assert!(d.has_prev_page);
        assert!(!d.has_next_page);
        assert_eq!(d.offset, 60);
    }
}
