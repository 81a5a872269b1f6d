use cropdeck_core::preset::{CropTarget, PresetTag, ProfileOwner};

/// The target selector's current values. Owner and slot are remembered
/// even while a preset that ignores them is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetChoice {
    pub tag: PresetTag,
    pub owner: ProfileOwner,
    pub slot: usize,
}

impl Default for TargetChoice {
    fn default() -> Self {
        Self {
            tag: PresetTag::HeaderBanner,
            owner: ProfileOwner::User,
            slot: 0,
        }
    }
}

impl TargetChoice {
    pub const OWNERS: [ProfileOwner; 3] =
        [ProfileOwner::Admin, ProfileOwner::User, ProfileOwner::HomeFooter];

    pub fn to_target(self) -> CropTarget {
        match self.tag {
            PresetTag::ProfileCircle => CropTarget::ProfileCircle(self.owner),
            PresetTag::ReportThumbnail => CropTarget::ReportThumbnail(self.slot),
            tag => CropTarget::default_for(tag),
        }
    }
}
