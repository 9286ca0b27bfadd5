use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    /// HTTP base URL serving `data/<lang>.json`; local files are used when unset
    pub content_url: Option<String>,
    /// Directory holding `data/<lang>.json` when no URL is configured
    pub data_dir: PathBuf,

    // Preferences
    pub prefs_file: PathBuf,

    // Host document
    /// Language the page declares before any content is loaded
    pub declared_lang: Option<String>,

    // Output
    /// Write the rendered page here instead of stdout
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let content_url = std::env::var("CV_CONTENT_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());
        if let Some(url) = &content_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("CV_CONTENT_URL must be an http(s) URL, got '{}'", url);
            }
        }

        Ok(Self {
            content_url,
            data_dir: std::env::var("CV_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            prefs_file: std::env::var("CV_PREFS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".cv-prefs.json")),
            declared_lang: std::env::var("CV_DECLARED_LANG").ok(),
            output: std::env::var("CV_OUTPUT").ok().map(PathBuf::from),
        })
    }

    /// Write `content` to the configured output, or stdout.
    pub fn write_output(&self, content: &str) -> Result<()> {
        match &self.output {
            Some(path) => std::fs::write(path, content)
                .with_context(|| format!("Failed to write page to {}", path.display())),
            None => {
                print!("{}", content);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "CV_CONTENT_URL",
        "CV_DATA_DIR",
        "CV_PREFS_FILE",
        "CV_DECLARED_LANG",
        "CV_OUTPUT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load");
        assert!(config.content_url.is_none());
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.prefs_file, PathBuf::from(".cv-prefs.json"));
        assert!(config.declared_lang.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    #[serial]
    fn test_reads_all_variables() {
        clear_env();
        std::env::set_var("CV_CONTENT_URL", "https://cv.example.com");
        std::env::set_var("CV_DATA_DIR", "/srv/cv");
        std::env::set_var("CV_PREFS_FILE", "/tmp/prefs.json");
        std::env::set_var("CV_DECLARED_LANG", "en");
        std::env::set_var("CV_OUTPUT", "/tmp/index.html");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.content_url.as_deref(), Some("https://cv.example.com"));
        assert_eq!(config.data_dir, PathBuf::from("/srv/cv"));
        assert_eq!(config.prefs_file, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.declared_lang.as_deref(), Some("en"));
        assert_eq!(config.output, Some(PathBuf::from("/tmp/index.html")));
    }

    #[test]
    #[serial]
    fn test_blank_content_url_means_local_files() {
        clear_env();
        std::env::set_var("CV_CONTENT_URL", "  ");
        let config = Config::from_env().expect("Should load");
        clear_env();
        assert!(config.content_url.is_none());
    }

    #[test]
    #[serial]
    fn test_rejects_non_http_content_url() {
        clear_env();
        std::env::set_var("CV_CONTENT_URL", "ftp://cv.example.com");
        let result = Config::from_env();
        clear_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("CV_CONTENT_URL"));
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("index.html");
        let config = Config {
            content_url: None,
            data_dir: PathBuf::from("."),
            prefs_file: PathBuf::from(".cv-prefs.json"),
            declared_lang: None,
            output: Some(path.clone()),
        };
        config.write_output("<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }
}
