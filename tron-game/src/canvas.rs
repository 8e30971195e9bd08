//! Host imports — the drawing primitives and the player-index hook the
//! browser page provides under the `env` import module.
//!
//! Game logic talks to a [`HostImports`] implementation instead of the raw
//! externs, so the same code draws into the page on wasm and into a
//! recording fake in tests.

/// Everything the module may ask of its host.
pub trait HostImports {
    fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32);
    fn draw_line(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32);
    fn set_player_index(&mut self, player_index: u32);
}

#[cfg(target_arch = "wasm32")]
mod env {
    #[link(wasm_import_module = "env")]
    unsafe extern "C" {
        pub fn set_color(r: f32, g: f32, b: f32, a: f32);
        pub fn draw_circle(x: f32, y: f32, radius: f32);
        pub fn draw_line(min_x: f32, min_y: f32, max_x: f32, max_y: f32);
        pub fn set_player_index(player_index: i32);
    }
}

/// The real host, reached through the `env` imports.
#[cfg(target_arch = "wasm32")]
pub struct Env;

#[cfg(target_arch = "wasm32")]
impl HostImports for Env {
    fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        // SAFETY: plain numeric import supplied by the host page.
        unsafe { env::set_color(r, g, b, a) }
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32) {
        // SAFETY: as above.
        unsafe { env::draw_circle(x, y, radius) }
    }

    fn draw_line(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
        // SAFETY: as above.
        unsafe { env::draw_line(min_x, min_y, max_x, max_y) }
    }

    fn set_player_index(&mut self, player_index: u32) {
        // SAFETY: as above.
        unsafe { env::set_player_index(player_index as i32) }
    }
}

/// One recorded host call.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetColor(f32, f32, f32, f32),
    Circle(f32, f32, f32),
    Line(f32, f32, f32, f32),
    PlayerIndex(u32),
}

/// Records every call in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<HostCall>,
}

#[cfg(test)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the drawing calls, skipping player-index assignments.
    pub fn drawing(&self) -> impl Iterator<Item = &HostCall> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, HostCall::PlayerIndex(_)))
    }
}

#[cfg(test)]
impl HostImports for Recorder {
    fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.calls.push(HostCall::SetColor(r, g, b, a));
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.calls.push(HostCall::Circle(x, y, radius));
    }

    fn draw_line(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
        self.calls.push(HostCall::Line(min_x, min_y, max_x, max_y));
    }

    fn set_player_index(&mut self, player_index: u32) {
        self.calls.push(HostCall::PlayerIndex(player_index));
    }
}
