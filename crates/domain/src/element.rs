//! Page element contract — ids of the elements the dashboard reads and writes.

/// An element of the dashboard page, addressed by its `id` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    ThermalImage,
    Min,
    Max,
    Avg,
    LogBox,
    LegendMax,
    LegendMid,
    LegendMin,
    RefreshInterval,
    SaveButton,
    FullscreenButton,
}

impl ElementId {
    /// Every element the dashboard depends on.
    pub const ALL: [Self; 11] = [
        Self::ThermalImage,
        Self::Min,
        Self::Max,
        Self::Avg,
        Self::LogBox,
        Self::LegendMax,
        Self::LegendMid,
        Self::LegendMin,
        Self::RefreshInterval,
        Self::SaveButton,
        Self::FullscreenButton,
    ];

    /// The `id` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThermalImage => "thermalImg",
            Self::Min => "min",
            Self::Max => "max",
            Self::Avg => "avg",
            Self::LogBox => "logbox",
            Self::LegendMax => "cb-max",
            Self::LegendMid => "cb-mid",
            Self::LegendMin => "cb-min",
            Self::RefreshInterval => "refreshInterval",
            Self::SaveButton => "btnSave",
            Self::FullscreenButton => "btnFullscreen",
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_use_distinct_ids() {
        let ids: HashSet<_> = ElementId::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(ids.len(), ElementId::ALL.len());
    }

    #[test]
    fn should_match_page_markup_ids() {
        assert_eq!(ElementId::ThermalImage.as_str(), "thermalImg");
        assert_eq!(ElementId::LegendMid.to_string(), "cb-mid");
        assert_eq!(ElementId::FullscreenButton.as_str(), "btnFullscreen");
    }
}
