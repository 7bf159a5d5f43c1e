//! Home page hero carousel slide.

use serde::{Deserialize, Serialize};

/// Slides render in ascending `position` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub cta_label: Option<String>,
    pub cta_link: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub position: i32,
    pub is_active: bool,
}
