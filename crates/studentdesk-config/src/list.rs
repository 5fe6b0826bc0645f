use std::env;

/// Page-size choices offered by the student list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    pub per_page_options: Vec<usize>,
    pub default_per_page: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            per_page_options: vec![5, 10, 20, 50],
            default_per_page: 10,
        }
    }
}

impl ListConfig {
    /// # Environment Variables
    ///
    /// - `LIST_PER_PAGE_OPTIONS`: Comma separated, default `5,10,20,50`
    /// - `LIST_DEFAULT_PER_PAGE`: Default 10, coerced to one of the options
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let per_page_options = env::var("LIST_PER_PAGE_OPTIONS")
            .ok()
            .map(|raw| parse_options(&raw))
            .filter(|opts| !opts.is_empty())
            .unwrap_or(defaults.per_page_options);
        let requested =
            crate::env_parse("LIST_DEFAULT_PER_PAGE").unwrap_or(defaults.default_per_page);

        Self::new(per_page_options, requested)
    }

    /// Builds a config whose default is guaranteed to be one of `options`.
    ///
    /// A default missing from the list is replaced by the closest option.
    #[must_use]
    pub fn new(mut options: Vec<usize>, default_per_page: usize) -> Self {
        options.retain(|n| *n > 0);
        options.sort_unstable();
        options.dedup();
        if options.is_empty() {
            options = Self::default().per_page_options;
        }

        let default_per_page = options
            .iter()
            .copied()
            .min_by_key(|n| n.abs_diff(default_per_page))
            .unwrap_or(options[0]);

        Self {
            per_page_options: options,
            default_per_page,
        }
    }

    #[must_use]
    pub fn is_option(&self, per_page: usize) -> bool {
        self.per_page_options.contains(&per_page)
    }
}

fn parse_options(raw: &str) -> Vec<usize> {
    raw.split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ListConfig::default();
        assert_eq!(config.per_page_options, vec![5, 10, 20, 50]);
        assert_eq!(config.default_per_page, 10);
        assert!(config.is_option(20));
        assert!(!config.is_option(7));
    }

    #[test]
    fn test_parse_options_skips_junk() {
        assert_eq!(parse_options("5, x, 15,,30"), vec![5, 15, 30]);
    }

    #[test]
    fn test_new_coerces_default() {
        let config = ListConfig::new(vec![25, 5, 0, 5], 7);
        assert_eq!(config.per_page_options, vec![5, 25]);
        assert_eq!(config.default_per_page, 5);
    }

    #[test]
    fn test_new_with_empty_options_falls_back() {
        let config = ListConfig::new(vec![], 20);
        assert_eq!(config.per_page_options, vec![5, 10, 20, 50]);
        assert_eq!(config.default_per_page, 20);
    }
}
