use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    Hybrid,
    #[serde(rename = "On-site")]
    OnSite,
}

impl WorkMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "remote" => Some(Self::Remote),
            "hybrid" => Some(Self::Hybrid),
            "on-site" | "onsite" => Some(Self::OnSite),
            _ => None,
        }
    }
}

/// Work-mode predicate for job listings. `All` disables filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkModeFilter {
    #[default]
    All,
    Only(WorkMode),
}

impl WorkModeFilter {
    pub fn from_name(name: &str) -> Option<Self> {
        if name.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        WorkMode::from_name(name).map(Self::Only)
    }

    pub fn accepts(&self, mode: WorkMode) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub work_mode: WorkMode,
    /// Monthly salary in USD.
    pub salary: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub provider: String,
    pub link: String,
    pub duration: String,
    pub rating: f32,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_mode_wire_names() {
        assert_eq!(serde_json::to_string(&WorkMode::OnSite).unwrap(), r#""On-site""#);
        assert_eq!(WorkMode::from_name("On-site"), Some(WorkMode::OnSite));
        assert_eq!(WorkMode::from_name("moon"), None);
    }

    #[test]
    fn test_filter_all_accepts_everything() {
        let all = WorkModeFilter::from_name("All").unwrap();
        assert!(all.accepts(WorkMode::Remote));
        assert!(all.accepts(WorkMode::OnSite));

        let remote = WorkModeFilter::from_name("remote").unwrap();
        assert!(remote.accepts(WorkMode::Remote));
        assert!(!remote.accepts(WorkMode::Hybrid));
    }
}
