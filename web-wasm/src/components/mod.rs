pub mod benchmark_charts;
pub mod charts;
pub mod config_screen;
pub mod dashboard_charts;
pub mod dashboard_screen;
pub mod export_buttons;
pub mod header;
pub mod job_sidebar;
pub mod progress_bar;
pub mod toaster;
pub mod upload_area;
