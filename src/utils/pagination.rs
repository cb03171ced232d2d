//! Utilidades de paginación
//!
//! Este módulo contiene los parámetros de paginación de los listados
//! y el helper para trocear colecciones en páginas.

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PER_PAGE: i64 = 10;
const MAX_PER_PAGE: i64 = 100;

/// Parámetros de paginación recibidos por query string
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PaginationParams {
    /// Página efectiva (1-based)
    pub fn page(&self) -> i64 {
        self.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE)
    }

    /// Tamaño de página efectivo, acotado a MAX_PER_PAGE
    pub fn per_page(&self) -> i64 {
        self.per_page
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PER_PAGE)
            .min(MAX_PER_PAGE)
    }

    /// Offset en filas para la consulta SQL
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: None, per_page: None }
    }
}

/// Página de resultados para la API
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, params: &PaginationParams) -> Self {
        let per_page = params.per_page();
        let total_pages = if total == 0 { 0 } else { (total + per_page - 1) / per_page };
        Self {
            items,
            total,
            page: params.page(),
            per_page,
            total_pages,
        }
    }
}

/// Trocear una colección ya materializada en una página
pub fn paginate_slice<T: Clone>(items: &[T], params: &PaginationParams) -> Paginated<T> {
    let total = items.len() as i64;
    let start = params.offset().min(total) as usize;
    let end = (params.offset() + params.per_page()).min(total) as usize;
    Paginated::new(items[start..end].to_vec(), total, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: i64, per_page: i64) -> PaginationParams {
        PaginationParams { page: Some(page), per_page: Some(per_page) }
    }

    #[test]
    fn test_defaults() {
        let p = PaginationParams::default();
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_per_page_cap() {
        let p = params(1, 500);
        assert_eq!(p.per_page(), 100);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let p = params(0, -5);
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), 10);
    }

    #[test]
    fn test_paginate_slice() {
        let items: Vec<i32> = (1..=25).collect();

        let first = paginate_slice(&items, &params(1, 10));
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.total, 25);
        assert_eq!(first.total_pages, 3);

        let last = paginate_slice(&items, &params(3, 10));
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);

        let beyond = paginate_slice(&items, &params(5, 10));
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 25);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<i32> = vec![];
        let page = paginate_slice(&items, &PaginationParams::default());
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
