mod preview;
mod target;
mod ui;

pub use preview::PreviewState;
pub use target::TargetChoice;
pub use ui::UIState;
