//! Browse-side catalog queries: wardrobe filtering and facet listings.

use std::collections::BTreeMap;

use crate::{
    catalog::model::Garment,
    catalog::store::Catalog,
    foundation::core::Category,
};

#[derive(Clone, Debug, Default, PartialEq)]
/// Wardrobe browse filter.
///
/// Empty fields impose no constraint; the default filter matches everything.
pub struct WardrobeFilter {
    /// Restrict to one category; `None` lists all categories.
    pub category: Option<Category>,
    /// Case-insensitive substring matched against name and brand.
    pub search: Option<String>,
    /// Brand allow-list; empty allows every brand.
    pub brands: Vec<String>,
    /// Color allow-list; empty allows every color.
    pub colors: Vec<String>,
    /// Keep only wishlisted items.
    pub wishlist_only: bool,
    /// Keep only new arrivals.
    pub new_only: bool,
}

impl WardrobeFilter {
    /// Whether `garment` passes every active constraint.
    pub fn matches(&self, garment: &Garment) -> bool {
        if let Some(category) = self.category
            && garment.category != category
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !needle.is_empty()
                && !garment.name.to_lowercase().contains(&needle)
                && !garment.brand.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if !self.brands.is_empty() && !self.brands.contains(&garment.brand) {
            return false;
        }
        if !self.colors.is_empty() && !self.colors.contains(&garment.color) {
            return false;
        }
        if self.wishlist_only && !garment.is_wishlisted {
            return false;
        }
        if self.new_only && !garment.is_new {
            return false;
        }
        true
    }
}

/// Filter catalog garments, preserving catalog order.
pub fn filter_garments<'a>(catalog: &'a Catalog, filter: &WardrobeFilter) -> Vec<&'a Garment> {
    catalog
        .garments()
        .iter()
        .filter(|garment| filter.matches(garment))
        .collect()
}

/// Distinct brand names in first-appearance order.
pub fn brand_facets(catalog: &Catalog) -> Vec<String> {
    let mut brands = Vec::new();
    for garment in catalog.garments() {
        if !brands.contains(&garment.brand) {
            brands.push(garment.brand.clone());
        }
    }
    brands
}

/// Distinct color names in first-appearance order.
pub fn color_facets(catalog: &Catalog) -> Vec<String> {
    let mut colors = Vec::new();
    for garment in catalog.garments() {
        if !colors.contains(&garment.color) {
            colors.push(garment.color.clone());
        }
    }
    colors
}

/// Garment count per category, including zero-count categories.
pub fn category_counts(catalog: &Catalog) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    for category in Category::ALL {
        counts.insert(category, 0);
    }
    for garment in catalog.garments() {
        *counts.entry(garment.category).or_default() += 1;
    }
    counts
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/query.rs"]
mod tests;
