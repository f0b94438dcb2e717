// Site configuration rows from the lookup spreadsheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: String,
    pub property_id: String,
}

impl SiteConfig {
    /// Column A is the site name, column B the GA4 property ID. Short rows
    /// leave the missing cells empty rather than failing.
    pub fn from_row(row: &[String]) -> Self {
        Self {
            site_name: row.first().cloned().unwrap_or_default(),
            property_id: row.get(1).cloned().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row() {
        let row = vec!["GrowUp".to_string(), "12345".to_string()];
        let site = SiteConfig::from_row(&row);
        assert_eq!(site.site_name, "GrowUp");
        assert_eq!(site.property_id, "12345");
    }

    #[test]
    fn test_from_short_row() {
        let site = SiteConfig::from_row(&["OnlyName".to_string()]);
        assert_eq!(site.site_name, "OnlyName");
        assert_eq!(site.property_id, "");

        let site = SiteConfig::from_row(&[]);
        assert_eq!(site.site_name, "");
        assert_eq!(site.property_id, "");
    }
}
