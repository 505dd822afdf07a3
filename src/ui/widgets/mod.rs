// src/ui/widgets/mod.rs

pub mod analysis_view;     // Scrollable report: all sections stacked.
pub mod certificate_panel;
pub mod cookie_table;
pub mod footer;            // Key hints for the current state.
pub mod headers_table;
pub mod input;             // The URL field.
pub mod notice_popup;      // Transient error/info popup.
pub mod summary;           // Letter grade and tally.
pub mod technology_stack;
