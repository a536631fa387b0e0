//! Check-in URL templating for lecture QR codes.

use attend_core::config::FrontendConfig;
use attend_core::types::LectureId;

/// Builds `{base_url}{attend_path}?lectureId={id}`.
#[derive(Debug, Clone)]
pub struct QrLinkBuilder {
    base_url: String,
    attend_path: String,
}

impl QrLinkBuilder {
    pub fn new(config: &FrontendConfig) -> Self {
        let path = config.attend_path.trim();
        let attend_path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            attend_path,
        }
    }

    /// Check-in link for one lecture.
    pub fn link_for(&self, lecture_id: LectureId) -> String {
        format!("{}{}?lectureId={lecture_id}", self.base_url, self.attend_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_format() {
        let builder = QrLinkBuilder::new(&FrontendConfig {
            base_url: "https://attend.example.edu/".to_string(),
            attend_path: "attend".to_string(),
        });
        let id = LectureId::new();
        assert_eq!(
            builder.link_for(id),
            format!("https://attend.example.edu/attend?lectureId={id}")
        );
    }

    #[test]
    fn test_default_config() {
        let builder = QrLinkBuilder::new(&FrontendConfig::default());
        let id = LectureId::new();
        assert_eq!(
            builder.link_for(id),
            format!("http://localhost:5173/attend?lectureId={id}")
        );
    }
}
