/// JSON backdrop definitions.
pub mod model;
/// Built-in scene backgrounds.
pub mod presets;
