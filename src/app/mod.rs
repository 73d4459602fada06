pub mod app;
pub mod event;
pub mod form;
pub mod input_buffer;
pub mod mode;
pub mod render_state;
pub mod toast;

pub use app::App;
pub use event::AppEvent;
pub use render_state::RenderState;
