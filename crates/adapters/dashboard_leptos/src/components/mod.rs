mod controls;
mod legend_bar;
mod log_panel;
mod readout_panel;
mod thermal_image;

pub use controls::Controls;
pub use legend_bar::LegendBar;
pub use log_panel::LogPanel;
pub use readout_panel::ReadoutPanel;
pub use thermal_image::ThermalImage;
