use serde::{Deserialize, Serialize};

/// A coarse professional category used to bucket skills and drive recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[default]
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Cloud Computing")]
    CloudComputing,
    #[serde(rename = "DevOps")]
    DevOps,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
    #[serde(rename = "Product Management")]
    ProductManagement,
}

impl Domain {
    pub const ALL: [Domain; 9] = [
        Domain::SoftwareDevelopment,
        Domain::WebDevelopment,
        Domain::DataScience,
        Domain::CloudComputing,
        Domain::DevOps,
        Domain::MobileDevelopment,
        Domain::UiUxDesign,
        Domain::DigitalMarketing,
        Domain::ProductManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::SoftwareDevelopment => "Software Development",
            Domain::WebDevelopment => "Web Development",
            Domain::DataScience => "Data Science",
            Domain::CloudComputing => "Cloud Computing",
            Domain::DevOps => "DevOps",
            Domain::MobileDevelopment => "Mobile Development",
            Domain::UiUxDesign => "UI/UX Design",
            Domain::DigitalMarketing => "Digital Marketing",
            Domain::ProductManagement => "Product Management",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Domain> {
        let name = name.trim();
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }

    /// Like [`Domain::from_name`], but unknown or missing names resolve to the default domain.
    pub fn from_name_or_default(name: Option<&str>) -> Domain {
        name.and_then(Domain::from_name).unwrap_or_default()
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
