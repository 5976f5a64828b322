//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Banner`: Home screen title art
//! - `TitleBar`: Screen heading with step indicator
//! - `MenuList`: Labelled actions with a cursor (home menu, Yes/No choice)
//! - `ProgressBar`: Send fraction gauge (width is its only state)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `FilePickerState`: Directory browser filtered by extension
//! - `TextField`: Single-line text input with placeholder
//!
//! ## Co-location of Concerns
//!
//! Each component file contains its state types, event types, rendering
//! logic, event handling, and tests.
//!
//! ## Props-Based Data Flow
//!
//! Components receive session data as props, never by reaching into the
//! `Session` themselves:
//!
//! ```rust,ignore
//! // Good: the cursor is passed in
//! MenuList::new(&items, session.confirm_cursor, Marker::Radio).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── banner.rs        (Home screen art)
//! ├── title_bar.rs     (Screen heading)
//! ├── menu_list.rs     (Cursor list)
//! ├── file_picker.rs   (Directory browser)
//! ├── text_field.rs    (Single-line input)
//! └── progress_bar.rs  (Gauge)
//! ```

pub mod banner;
pub mod file_picker;
pub mod menu_list;
pub mod progress_bar;
pub mod text_field;
pub mod title_bar;

pub use banner::Banner;
pub use file_picker::{FilePicker, FilePickerState, PickerEvent};
pub use menu_list::{Marker, MenuItem, MenuList};
pub use progress_bar::ProgressBar;
pub use text_field::{TextField, TextFieldEvent};
pub use title_bar::TitleBar;
