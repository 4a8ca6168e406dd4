// Page integration constants: element ids and attribute names the host page
// uses to opt into the particle field.

// Canvas mounted automatically at start, if present
pub const AUTO_CANVAS_ID: &str = "particle-field";

// Optional cursor decoration elements
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_CIRCLE_ID: &str = "cursor-circle";

// `data-count`, `data-color`, ... on the canvas override `FieldConfig` defaults
pub const CONFIG_ATTR_PREFIX: &str = "data-";
