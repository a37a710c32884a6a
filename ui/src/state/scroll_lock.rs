/// Counts overlays that want the page frozen. The body is locked while
/// at least one holder is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockCount(usize);

impl LockCount {
    pub fn is_locked(&self) -> bool {
        self.0 > 0
    }

    pub fn holders(&self) -> usize {
        self.0
    }

    /// True when this acquire locked the page.
    pub fn acquire(&mut self) -> bool {
        self.0 += 1;
        self.0 == 1
    }

    /// True when this release unlocked the page. Extra releases are ignored.
    pub fn release(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        self.0 == 0
    }
}
