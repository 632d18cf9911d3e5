//! Page bounds, sort parsing and the paginated response shape.

use sea_orm::sea_query::Order;

use crate::{
    model::api::{PaginatedDto, PaginationMetaDto},
    server::error::AppError,
};

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

/// Normalized 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub per_page: u64,
}

impl PageParams {
    /// Clamps `per_page` into `1..=100`, defaulting to 20, and `page` to at
    /// least 1. `page` is also capped so the row offset fits in an `i64`.
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        let per_page = per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let max_page = i64::MAX as u64 / per_page;

        Self {
            page: page.unwrap_or(1).clamp(1, max_page),
            per_page,
        }
    }

    /// Zero-based index for SeaORM's `fetch_page`.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// One page of domain items plus the counts needed for `meta`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
        }
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.per_page)
    }

    /// Converts each item and wraps the result in the list envelope.
    pub fn into_dto<U>(self, f: impl FnMut(T) -> U) -> PaginatedDto<U> {
        let meta = PaginationMetaDto {
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages(),
        };

        PaginatedDto {
            success: true,
            data: self.items.into_iter().map(f).collect(),
            meta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// Parses `asc`/`desc`, falling back to `default` when absent.
    pub fn parse(value: Option<&str>, default: SortDir) -> Result<Self, AppError> {
        match value {
            None | Some("") => Ok(default),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(other) => Err(AppError::BadRequest(format!(
                "Invalid sort_dir '{}', expected 'asc' or 'desc'",
                other
            ))),
        }
    }

    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// Resolves `sort_by` against a whitelist of `(name, column)` pairs.
pub fn parse_sort_by<C: Copy>(
    value: Option<&str>,
    allowed: &[(&str, C)],
    default: C,
) -> Result<C, AppError> {
    match value {
        None | Some("") => Ok(default),
        Some(name) => allowed
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, column)| *column)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid sort_by '{}'", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_and_per_page() {
        assert_eq!(PageParams::new(None, None), PageParams { page: 1, per_page: 20 });
        assert_eq!(PageParams::new(Some(0), Some(0)), PageParams { page: 1, per_page: 1 });
        assert_eq!(PageParams::new(Some(3), Some(500)), PageParams { page: 3, per_page: 100 });
        assert_eq!(PageParams::new(Some(3), Some(10)).index(), 2);
    }

    #[test]
    fn caps_page_so_offset_fits_i64() {
        let params = PageParams::new(Some(u64::MAX), Some(100));

        assert_eq!(params.page, i64::MAX as u64 / 100);
        let offset = params.index().checked_mul(params.per_page);
        assert!(offset.is_some_and(|o| o <= i64::MAX as u64));
    }

    #[test]
    fn computes_total_pages_with_ceiling() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 2), 3);
    }

    #[test]
    fn builds_meta_from_page() {
        let page = Page::new(vec![1, 2], 5, PageParams::new(Some(2), Some(2)));
        let dto = page.into_dto(|n| n * 10);

        assert!(dto.success);
        assert_eq!(dto.data, vec![10, 20]);
        assert_eq!(
            dto.meta,
            PaginationMetaDto {
                page: 2,
                per_page: 2,
                total: 5,
                total_pages: 3
            }
        );
    }

    #[test]
    fn rejects_unknown_sort_fields() {
        let allowed = [("name", 1), ("email", 2)];

        assert_eq!(parse_sort_by(None, &allowed, 0).unwrap(), 0);
        assert_eq!(parse_sort_by(Some("email"), &allowed, 0).unwrap(), 2);
        assert!(matches!(
            parse_sort_by(Some("password_hash"), &allowed, 0),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            SortDir::parse(Some("sideways"), SortDir::Asc),
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(SortDir::parse(Some("desc"), SortDir::Asc).unwrap(), SortDir::Desc);
    }
}
