use crate::tap_resolution::ClickIndexPolicy;
use coverflow_foundation::gesture_constants::{LONG_PRESS_TIMEOUT_MS, TOUCH_SLOP};
use coverflow_ui_graphics::Dp;

/// Rendering requirements the container places on its host.
///
/// Neighbouring pages are drawn outside the pager's bounds, so the container
/// must not clip its children. Some compositors also fail to honour disabled
/// child clipping on accelerated layers; `prefer_software_layer` tells those
/// hosts to composite the container in software. Neither flag affects touch
/// handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderHints {
    pub clip_children: bool,
    pub prefer_software_layer: bool,
}

impl Default for RenderHints {
    fn default() -> Self {
        Self {
            clip_children: false,
            prefer_software_layer: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerContainerOptions {
    pub touch_slop: Dp,
    /// Physical pixels per dp, used to resolve `touch_slop`.
    pub density: f32,
    pub long_press_timeout_ms: u64,
    pub click_index_policy: ClickIndexPolicy,
    pub render_hints: RenderHints,
}

impl Default for PagerContainerOptions {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            density: 1.0,
            long_press_timeout_ms: LONG_PRESS_TIMEOUT_MS,
            click_index_policy: ClickIndexPolicy::default(),
            render_hints: RenderHints::default(),
        }
    }
}

impl PagerContainerOptions {
    pub fn with_touch_slop(mut self, touch_slop: Dp) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_long_press_timeout(mut self, timeout_ms: u64) -> Self {
        self.long_press_timeout_ms = timeout_ms;
        self
    }

    pub fn with_click_index_policy(mut self, policy: ClickIndexPolicy) -> Self {
        self.click_index_policy = policy;
        self
    }

    pub fn with_render_hints(mut self, render_hints: RenderHints) -> Self {
        self.render_hints = render_hints;
        self
    }

    pub fn touch_slop_px(&self) -> f32 {
        self.touch_slop.to_px(self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_do_not_clip_and_pass_indices_through() {
        let options = PagerContainerOptions::default();
        assert!(!options.render_hints.clip_children);
        assert!(options.render_hints.prefer_software_layer);
        assert_eq!(options.click_index_policy, ClickIndexPolicy::PassThrough);
        assert_eq!(options.touch_slop_px(), TOUCH_SLOP.0);
    }

    #[test]
    fn slop_scales_with_density() {
        let options = PagerContainerOptions::default()
            .with_touch_slop(Dp(10.0))
            .with_density(3.0);
        assert_eq!(options.touch_slop_px(), 30.0);
    }
}
