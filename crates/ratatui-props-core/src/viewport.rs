#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportState {
    pub x: u32,
    pub y: u32,
    pub viewport_w: u16,
    pub viewport_h: u16,
    pub content_w: u32,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport(&mut self, w: u16, h: u16) {
        self.viewport_w = w;
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, w: u32, h: u32) {
        self.content_w = w;
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        let max_y = self.max_y();
        let max_x = self.max_x();
        self.y = self.y.min(max_y);
        self.x = self.x.min(max_x);
    }

    pub fn scroll_y_by(&mut self, delta: i32) {
        let next = self.y as i64 + delta as i64;
        self.y = next.clamp(0, self.max_y() as i64) as u32;
    }

    pub fn page_down(&mut self) {
        self.scroll_y_by(self.viewport_h.saturating_sub(1) as i32);
    }

    pub fn page_up(&mut self) {
        self.scroll_y_by(-(self.viewport_h.saturating_sub(1) as i32));
    }

    pub fn to_top(&mut self) {
        self.y = 0;
    }

    pub fn to_bottom(&mut self) {
        self.y = self.max_y();
    }

    pub fn percent_y(&self) -> Option<u8> {
        if self.content_h == 0 || self.viewport_h == 0 || self.content_h <= self.viewport_h as u32 {
            return None;
        }
        let visible_bottom = self.y.saturating_add(self.viewport_h as u32) as f64;
        let pct = (visible_bottom / self.content_h as f64 * 100.0).round();
        Some(pct.clamp(0.0, 100.0) as u8)
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(self.viewport_h as u32)
    }

    fn max_x(&self) -> u32 {
        self.content_w.saturating_sub(self.viewport_w as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_clamps_both_axes() {
        let mut s = ViewportState::default();
        s.set_viewport(10, 5);
        s.set_content(12, 6);
        s.x = 99;
        s.y = 99;
        s.clamp();
        assert_eq!(s.x, 2);
        assert_eq!(s.y, 1);
    }

    #[test]
    fn paging_and_percent() {
        let mut s = ViewportState::default();
        s.set_viewport(10, 5);
        s.set_content(10, 20);
        assert_eq!(s.percent_y(), Some(25));
        s.page_down();
        assert_eq!(s.y, 4);
        s.to_bottom();
        assert_eq!(s.y, 15);
        assert_eq!(s.percent_y(), Some(100));
        s.page_up();
        assert_eq!(s.y, 11);
        s.to_top();
        assert_eq!(s.y, 0);
    }

    #[test]
    fn short_content_has_no_percent() {
        let mut s = ViewportState::default();
        s.set_viewport(10, 5);
        s.set_content(10, 3);
        assert_eq!(s.percent_y(), None);
        s.scroll_y_by(3);
        assert_eq!(s.y, 0);
    }
}
