//! Cover text generation.
//!
//! The renderer fills three text frames from the plan; titles come from a
//! fixed per-theme table, with the client name as the fallback.

use serde::{Deserialize, Serialize};

/// Texts handed to the renderer alongside the placements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanTexts {
    #[serde(rename = "COVER_TITLE")]
    pub cover_title: String,

    #[serde(rename = "COVER_SUB")]
    pub cover_sub: String,

    #[serde(rename = "CLIENT_NAME")]
    pub client_name: String,
}

/// Build cover texts for a theme and client name
pub fn generate(theme: &str, client_name: &str) -> PlanTexts {
    let fallback = || {
        if client_name.is_empty() {
            "Magazine".to_string()
        } else {
            client_name.to_string()
        }
    };

    let cover_title = match theme {
        "lavstory" => "Our Love Story".to_string(),
        "for_her" => "For Her".to_string(),
        "adult18" => "Private Collection".to_string(),
        _ => fallback(),
    };

    let cover_sub = match theme {
        "lavstory" => "Best Moments".to_string(),
        _ => String::new(),
    };

    PlanTexts {
        cover_title,
        cover_sub,
        client_name: client_name.to_string(),
    }
}
