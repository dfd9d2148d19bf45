//! Reusable UI components

pub mod attribute_panel;
pub mod character_sheet;
pub mod class_panel;
pub mod skill_check_panel;
pub mod skill_panel;
pub mod toolbar;

pub use character_sheet::CharacterSheet;
pub use toolbar::Toolbar;
