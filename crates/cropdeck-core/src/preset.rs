use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{GENERIC_PRESET_HEIGHT, GENERIC_PRESET_WIDTH};

/// Output shape families known to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetTag {
    HeaderBanner,
    FooterBanner,
    Signature,
    ProfileCircle,
    ReportThumbnail,
}

impl PresetTag {
    pub const ALL: &[Self] = &[
        Self::HeaderBanner,
        Self::FooterBanner,
        Self::Signature,
        Self::ProfileCircle,
        Self::ReportThumbnail,
    ];

    /// Kebab-case identifier used on the command line and in file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeaderBanner => "header-banner",
            Self::FooterBanner => "footer-banner",
            Self::Signature => "signature",
            Self::ProfileCircle => "profile-circle",
            Self::ReportThumbnail => "report-thumbnail",
        }
    }
}

impl fmt::Display for PresetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderBanner => write!(f, "Header Banner"),
            Self::FooterBanner => write!(f, "Footer Banner"),
            Self::Signature => write!(f, "Signature"),
            Self::ProfileCircle => write!(f, "Profile Photo"),
            Self::ReportThumbnail => write!(f, "Report Thumbnail"),
        }
    }
}

impl FromStr for PresetTag {
    type Err = String;

    /// Accepts the kebab-case ids plus the camelCase names stored by older
    /// form data (`banner`, `footerBanner`, `adminProfile`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "header-banner" | "banner" => Ok(Self::HeaderBanner),
            "footer-banner" | "footerBanner" => Ok(Self::FooterBanner),
            "signature" => Ok(Self::Signature),
            "profile-circle" | "adminProfile" | "userProfile" | "homeFooterProfile" => {
                Ok(Self::ProfileCircle)
            }
            "report-thumbnail" | "report" => Ok(Self::ReportThumbnail),
            other => Err(format!("unknown preset tag: {other}")),
        }
    }
}

/// Mask applied to the finished output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskShape {
    Rectangle,
    Circle,
}

impl fmt::Display for MaskShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "rect"),
            Self::Circle => write!(f, "circle"),
        }
    }
}

/// A fixed output shape. Width and height are always > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub tag: PresetTag,
    pub width: u32,
    pub height: u32,
    pub mask: MaskShape,
}

impl Preset {
    /// Catch-all rectangle used when a caller hands over a tag the catalog
    /// does not know.
    pub fn generic() -> Self {
        Self {
            tag: PresetTag::HeaderBanner,
            width: GENERIC_PRESET_WIDTH,
            height: GENERIC_PRESET_HEIGHT,
            mask: MaskShape::Rectangle,
        }
    }

    /// Target aspect ratio (width / height).
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

const CATALOG: [Preset; 5] = [
    Preset {
        tag: PresetTag::HeaderBanner,
        width: 1200,
        height: 300,
        mask: MaskShape::Rectangle,
    },
    Preset {
        tag: PresetTag::FooterBanner,
        width: 1200,
        height: 300,
        mask: MaskShape::Rectangle,
    },
    Preset {
        tag: PresetTag::Signature,
        width: 300,
        height: 80,
        mask: MaskShape::Rectangle,
    },
    Preset {
        tag: PresetTag::ProfileCircle,
        width: 400,
        height: 400,
        mask: MaskShape::Circle,
    },
    Preset {
        tag: PresetTag::ReportThumbnail,
        width: 800,
        height: 1000,
        mask: MaskShape::Rectangle,
    },
];

/// All catalog entries, in display order.
pub fn catalog() -> &'static [Preset] {
    &CATALOG
}

/// Look up the output shape for a tag.
pub fn lookup(tag: PresetTag) -> Preset {
    CATALOG
        .iter()
        .copied()
        .find(|p| p.tag == tag)
        .unwrap_or_else(Preset::generic)
}

/// Look up by textual tag, falling back to [`Preset::generic`].
pub fn lookup_str(tag: &str) -> Preset {
    match tag.parse::<PresetTag>() {
        Ok(t) => lookup(t),
        Err(e) => {
            warn!(tag, error = %e, "Unknown preset tag, using generic rectangle");
            Preset::generic()
        }
    }
}

/// Whose profile photo a circular crop belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileOwner {
    Admin,
    User,
    HomeFooter,
}

impl fmt::Display for ProfileOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
            Self::HomeFooter => write!(f, "home footer"),
        }
    }
}

/// Where a finished crop is headed. One generic session serves all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropTarget {
    HeaderBanner,
    FooterBanner,
    Signature,
    ProfileCircle(ProfileOwner),
    /// Attachment slot index in the report list.
    ReportThumbnail(usize),
}

impl CropTarget {
    /// The first call site for a tag: user profile, report slot 0.
    pub fn default_for(tag: PresetTag) -> Self {
        match tag {
            PresetTag::HeaderBanner => Self::HeaderBanner,
            PresetTag::FooterBanner => Self::FooterBanner,
            PresetTag::Signature => Self::Signature,
            PresetTag::ProfileCircle => Self::ProfileCircle(ProfileOwner::User),
            PresetTag::ReportThumbnail => Self::ReportThumbnail(0),
        }
    }

    pub fn tag(&self) -> PresetTag {
        match self {
            Self::HeaderBanner => PresetTag::HeaderBanner,
            Self::FooterBanner => PresetTag::FooterBanner,
            Self::Signature => PresetTag::Signature,
            Self::ProfileCircle(_) => PresetTag::ProfileCircle,
            Self::ReportThumbnail(_) => PresetTag::ReportThumbnail,
        }
    }

    pub fn preset(&self) -> Preset {
        lookup(self.tag())
    }

    /// Slot index for multi-slot targets.
    pub fn slot_index(&self) -> Option<usize> {
        match self {
            Self::ReportThumbnail(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for CropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProfileCircle(owner) => write!(f, "Profile Photo ({owner})"),
            Self::ReportThumbnail(index) => write!(f, "Report Thumbnail #{}", index + 1),
            other => write!(f, "{}", other.tag()),
        }
    }
}
