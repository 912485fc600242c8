// Domain layer: data model, theme table, render frames and ports (interfaces).

pub mod model;
pub mod ports;
pub mod render;
pub mod theme;
