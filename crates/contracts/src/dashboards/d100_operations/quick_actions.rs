/// Visual weight of a quick-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEmphasis {
    Primary,
    Secondary,
}

/// Dashboard shortcut. Buttons are placeholders and trigger nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub emphasis: ActionEmphasis,
}

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Import Orders",
        description: "Upload from Robot-in",
        icon: "upload",
        emphasis: ActionEmphasis::Primary,
    },
    QuickAction {
        label: "Assign Staff",
        description: "Auto-assign today's orders",
        icon: "user-plus",
        emphasis: ActionEmphasis::Secondary,
    },
    QuickAction {
        label: "Generate Routes",
        description: "Optimize all routes",
        icon: "map-pin",
        emphasis: ActionEmphasis::Secondary,
    },
    QuickAction {
        label: "Sync Status",
        description: "Update purchase status",
        icon: "refresh",
        emphasis: ActionEmphasis::Secondary,
    },
];

pub fn quick_actions() -> &'static [QuickAction] {
    QUICK_ACTIONS
}
