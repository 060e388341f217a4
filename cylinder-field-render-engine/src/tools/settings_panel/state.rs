use bevy::prelude::*;

/// Which generation parameter a button or label is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    CylinderCount,
    RingColor,
}

// Components
#[derive(Component)]
pub struct SettingsPanelRoot;

/// Stepper button adjusting one parameter by a fixed delta.
#[derive(Component)]
pub struct ParamButton {
    pub param: ParamKind,
    pub delta: i32,
}

/// Text node showing a parameter's current value.
#[derive(Component)]
pub struct ParamValueLabel(pub ParamKind);

#[derive(Component)]
pub struct RingToggleButton;

#[derive(Component)]
pub struct RingToggleLabel;

#[derive(Component)]
pub struct GenerateButton;
