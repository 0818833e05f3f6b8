pub mod component;
pub mod container;
pub mod error;
pub mod event;
pub mod state;
pub mod variables;

pub use component::{Size, StatusBarComponent, DEFAULT_PRIORITY};
pub use container::StatusBarContainerView;
pub use error::{BarError, Result};
pub use event::Message;
pub use state::SystemSnapshot;
pub use variables::{template_dependencies, VariablePaths, VariableScope};
