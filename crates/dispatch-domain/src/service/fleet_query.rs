//! Filtering and skip/take pagination over fleet listings

use dispatch_types::{LicenseLevel, TruckClass};
use serde::{Deserialize, Serialize};

use crate::model::{Driver, Route, Truck};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Listing filters shared by drivers, trucks and routes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetQuery {
    /// Keep only entities that can take an assignment right now
    #[serde(default)]
    pub available_only: bool,
    /// Case-insensitive substring of id or name
    #[serde(default)]
    pub search: Option<String>,
    /// 1-based page number; 0 means the first page
    #[serde(default)]
    pub page: usize,
    /// 0 means `DEFAULT_PAGE_SIZE`
    #[serde(default)]
    pub page_size: usize,
}

impl FleetQuery {
    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches across all pages
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Something that can be listed and filtered
pub trait Listable {
    fn id(&self) -> &str;
    fn name(&self) -> Option<&str>;
    fn is_available(&self) -> bool;
}

impl Listable for Driver {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl Listable for Truck {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        None
    }

    fn is_available(&self) -> bool {
        self.is_assignable()
    }
}

impl Listable for Route {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Skip/take over an already filtered list
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
    let total = items.len();
    let total_pages = total.div_ceil(page_size);
    let skip = (page - 1).saturating_mul(page_size);

    let items = items.into_iter().skip(skip).take(page_size).collect();

    Page {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}

/// Filter by the query, then by `extra`, then paginate
pub fn query_with<T, F>(items: &[T], query: &FleetQuery, extra: F) -> Page<T>
where
    T: Listable + Clone,
    F: Fn(&T) -> bool,
{
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let matched: Vec<T> = items
        .iter()
        .filter(|item| !query.available_only || item.is_available())
        .filter(|item| match &needle {
            Some(needle) => matches_search(*item, needle),
            None => true,
        })
        .filter(|item| extra(*item))
        .cloned()
        .collect();

    paginate(matched, query.page, query.page_size)
}

pub fn query<T: Listable + Clone>(items: &[T], query: &FleetQuery) -> Page<T> {
    query_with(items, query, |_| true)
}

pub fn query_drivers(drivers: &[Driver], q: &FleetQuery, min_license: Option<LicenseLevel>) -> Page<Driver> {
    query_with(drivers, q, |d| min_license.map_or(true, |min| d.license >= min))
}

pub fn query_trucks(trucks: &[Truck], q: &FleetQuery, class: Option<TruckClass>) -> Page<Truck> {
    query_with(trucks, q, |t| class.map_or(true, |c| t.class == c))
}

fn matches_search<T: Listable>(item: &T, needle: &str) -> bool {
    item.id().to_lowercase().contains(needle)
        || item
            .name()
            .map(|n| n.to_lowercase().contains(needle))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_types::RouteType;

    fn drivers() -> Vec<Driver> {
        vec![
            Driver::new("d-001", "Maria Lopez", LicenseLevel::ClassA, 7),
            Driver::new("d-002", "Sam Okafor", LicenseLevel::ClassB, 2).unavailable(),
            Driver::new("d-003", "Lee Park", LicenseLevel::ClassC, 1),
            Driver::new("d-004", "Ana Maria Silva", LicenseLevel::ClassA, 12),
        ]
    }

    #[test]
    fn test_paginate_pages() {
        let items: Vec<u32> = (1..=45).collect();
        let first = paginate(items.clone(), 1, 20);
        assert_eq!(first.items.len(), 20);
        assert_eq!(first.items[0], 1);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());

        let last = paginate(items, 3, 20);
        assert_eq!(last.items, vec![41, 42, 43, 44, 45]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_defaults_and_overflow() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(items.clone(), 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.items.len(), 5);

        let past_end = paginate(items, 9, 2);
        assert!(past_end.is_empty());
        assert_eq!(past_end.total, 5);
        assert_eq!(past_end.total_pages, 3);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate(Vec::<u32>::new(), 1, 10);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_available_and_search() {
        let all = drivers();
        let page = query(&all, &FleetQuery::default().available_only());
        assert_eq!(page.total, 3);

        let page = query(&all, &FleetQuery::default().search("MARIA"));
        let ids: Vec<&str> = page.items.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d-001", "d-004"]);

        let page = query(&all, &FleetQuery::default().search("d-003"));
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_min_license_filter() {
        let page = query_drivers(&drivers(), &FleetQuery::default(), Some(LicenseLevel::ClassB));
        assert_eq!(page.total, 3);
        assert!(page.items.iter().all(|d| d.license >= LicenseLevel::ClassB));
    }

    #[test]
    fn test_truck_filters() {
        let trucks = vec![
            Truck::new("T-1", TruckClass::Heavy),
            Truck::new("T-2", TruckClass::Heavy).in_maintenance(),
            Truck::new("T-3", TruckClass::Light),
        ];
        let page = query_trucks(&trucks, &FleetQuery::default().available_only(), Some(TruckClass::Heavy));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "T-1");
    }

    #[test]
    fn test_routes_search_by_name() {
        let routes = vec![
            Route::new("r-1", RouteType::Hazmat, 100.0).with_name("Chemical plant run"),
            Route::new("r-2", RouteType::Standard, 40.0),
        ];
        let page = query(&routes, &FleetQuery::default().search("plant"));
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "r-1");
    }
}
