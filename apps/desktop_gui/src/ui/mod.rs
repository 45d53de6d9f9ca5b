//! UI layer for the desktop checker: form, checklist and profile panels.

pub mod app;

pub use app::AccessCheckerApp;
