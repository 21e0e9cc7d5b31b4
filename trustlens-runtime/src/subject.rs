//! Analysis subjects - the piece of content probes measure

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use trustlens_core::ContentDomain;

/// The content under analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Subject {
    Url { url: String },
    Image { path: PathBuf },
    Text { text: String },
}

impl Subject {
    /// Which scoring profile applies to this subject
    pub fn domain(&self) -> ContentDomain {
        match self {
            Subject::Url { .. } => ContentDomain::Url,
            Subject::Image { .. } => ContentDomain::Image,
            Subject::Text { .. } => ContentDomain::Text,
        }
    }

    /// Short display form for logs; long text is elided
    pub fn reference(&self) -> String {
        match self {
            Subject::Url { url } => url.clone(),
            Subject::Image { path } => path.display().to_string(),
            Subject::Text { text } => {
                let mut short: String = text.chars().take(60).collect();
                if text.chars().count() > 60 {
                    short.push('…');
                }
                short
            }
        }
    }
}
