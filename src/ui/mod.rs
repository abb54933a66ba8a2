/// UI layer: panel layout and result rendering.
pub mod panels;
pub mod view;
