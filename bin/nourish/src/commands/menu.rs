//! The customer menu: catalog browsing with client-side filtering.

use anyhow::Result;
use nourish_model::Product;
use nourish_session::Required;

use crate::context::{require_success, AppContext};
use crate::output;

/// List the catalog, optionally narrowed by a search term and a
/// category. Filtering happens client-side over the full list, the
/// same way the storefront's menu does.
pub async fn show(ctx: &AppContext, search: Option<&str>, category: Option<&str>) -> Result<()> {
    ctx.require(Required::Authenticated)?;

    let products = require_success(ctx.gateway.products().list().await)?;
    let filtered = filter(&products, search, category);

    if filtered.is_empty() && !products.is_empty() {
        println!("No products match.");
        return Ok(());
    }
    output::print_products(&filtered);
    Ok(())
}

/// Distinct category names, for discovering what to filter by.
pub async fn categories(ctx: &AppContext) -> Result<()> {
    ctx.require(Required::Authenticated)?;

    let products = require_success(ctx.gateway.products().list().await)?;
    let mut names: Vec<&str> = products.iter().map(|p| p.category.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn filter(products: &[Product], search: Option<&str>, category: Option<&str>) -> Vec<Product> {
    let needle = search.map(str::to_lowercase);
    products
        .iter()
        .filter(|p| match category {
            Some(c) => p.category.eq_ignore_ascii_case(c),
            None => true,
        })
        .filter(|p| match &needle {
            Some(q) => {
                p.name.to_lowercase().contains(q)
                    || p.description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(q))
                        .unwrap_or(false)
            }
            None => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str, category: &str, description: Option<&str>) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: description.map(Into::into),
            price: Decimal::from(90),
            image_url: None,
            category: category.into(),
            stock_quantity: None,
        }
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let products = vec![
            product("p1", "Dal Makhani", "mains", None),
            product("p2", "Paneer Tikka", "starters", Some("char-grilled paneer")),
            product("p3", "Gulab Jamun", "desserts", None),
        ];
        let hits = filter(&products, Some("PANEER"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p2");
    }

    #[test]
    fn category_filter_composes_with_search() {
        let products = vec![
            product("p1", "Dal Makhani", "mains", None),
            product("p2", "Dal Tadka", "mains", None),
            product("p3", "Dal Vada", "starters", None),
        ];
        let hits = filter(&products, Some("dal"), Some("mains"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn no_filters_returns_everything() {
        let products = vec![product("p1", "Dal", "mains", None)];
        assert_eq!(filter(&products, None, None).len(), 1);
    }
}
