// crates/danmaku-ui/src/modules/mod.rs
//
// Module registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing PlayerModule
//   2. Add `pub mod mypanel;` below
//   3. Add a field + one `.ui()` call in app.rs

pub mod overlay_module;
pub mod transport;

use danmaku_core::commands::{PlaybackState, PlayerCommand};
use egui::Ui;
use crate::context::AppContext;

/// Every player panel implements this trait.
/// Modules read playback state and emit commands. The only thing they may
/// mutate directly is the AppContext (the overlay advances its own epoch).
pub trait PlayerModule {
    fn name(&self) -> &str;
    fn ui(
        &mut self,
        ui:    &mut Ui,
        state: &PlaybackState,
        ctx:   &mut AppContext,
        cmd:   &mut Vec<PlayerCommand>,
    );
}
