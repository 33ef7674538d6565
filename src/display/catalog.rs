//! Catalog display formatting
//!
//! Formats the service catalog for terminal output, grouped by category.

use crate::models::Service;
use crate::quote::group_by_category;

/// Format filtered services as a grouped price list
pub fn format_catalog(filtered: &[&Service]) -> String {
    if filtered.is_empty() {
        return "No products found.\n\nTry adjusting your search or filter criteria."
            .to_string();
    }

    let name_width = filtered
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let groups = group_by_category(filtered);
    let mut output = String::new();
    let mut first = true;

    for (category, services) in groups {
        if services.is_empty() {
            continue;
        }

        if !first {
            output.push('\n');
        }
        first = false;

        output.push_str(&format!("{category}\n"));

        for (i, service) in services.iter().enumerate() {
            let is_last = i == services.len() - 1;
            let prefix = if is_last { "└── " } else { "├── " };
            output.push_str(&format!(
                "  {}{:<width$}  {:>10}\n",
                prefix,
                service.name,
                format_price(service.price),
                width = name_width
            ));
        }
    }

    output
}

/// Format a price with a dollar sign and two decimals
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(199.99), "$199.99");
        assert_eq!(format_price(1999.9), "$1999.90");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_catalog_groups_by_category() {
        let services = vec![
            Service::new("Turbo", 899.99, Category::Turbo),
            Service::new("Repair", 49.99, Category::Repair),
        ];
        let refs: Vec<&Service> = services.iter().collect();
        let output = format_catalog(&refs);

        // Category order puts Repair first even though Turbo is row one.
        let repair_pos = output.find("Repair").unwrap();
        let turbo_pos = output.find("Turbo").unwrap();
        assert!(repair_pos < turbo_pos);
        assert!(output.contains("$899.99"));
    }

    #[test]
    fn test_format_catalog_empty() {
        let output = format_catalog(&[]);
        assert!(output.contains("No products found"));
    }
}
