const DEFAULT_CV_URL: &str = "/cv/resume.pdf";
const DEFAULT_CV_FILE_NAME: &str = "resume.pdf";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SiteConfig {
    pub(crate) cv_url: String,
    pub(crate) cv_file_name: String,
    pub(crate) analytics_label: String,
}

/// Build-time settings. Each value may come from a plain env var or Trunk's
/// `TRUNK_PUBLIC_` variant.
pub(crate) fn site_config() -> SiteConfig {
    let cv_url = pick(
        option_env!("FOLIO_CV_URL").or(option_env!("TRUNK_PUBLIC_FOLIO_CV_URL")),
        DEFAULT_CV_URL,
    );
    let cv_file_name = pick(
        option_env!("FOLIO_CV_FILE_NAME").or(option_env!("TRUNK_PUBLIC_FOLIO_CV_FILE_NAME")),
        &file_name_from_url(&cv_url).unwrap_or_else(|| DEFAULT_CV_FILE_NAME.to_string()),
    );
    let analytics_label = pick(
        option_env!("FOLIO_ANALYTICS_LABEL").or(option_env!("TRUNK_PUBLIC_FOLIO_ANALYTICS_LABEL")),
        &cv_file_name,
    );
    SiteConfig {
        cv_url,
        cv_file_name,
        analytics_label,
    }
}

fn pick(raw: Option<&str>, fallback: &str) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn file_name_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let name = path.rsplit('/').next()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back() {
        assert_eq!(pick(None, "x"), "x");
        assert_eq!(pick(Some("   "), "x"), "x");
        assert_eq!(pick(Some(" /cv/a.pdf "), "x"), "/cv/a.pdf");
    }

    #[test]
    fn file_name_taken_from_url_path() {
        assert_eq!(file_name_from_url("/cv/Jane Doe.pdf?v=2").as_deref(), Some("Jane Doe.pdf"));
        assert_eq!(file_name_from_url("https://example.com/cv/"), None);
    }

    #[test]
    fn defaults_are_consistent() {
        let config = site_config();
        assert!(!config.cv_url.is_empty());
        assert!(!config.cv_file_name.is_empty());
        assert!(!config.analytics_label.is_empty());
    }
}
