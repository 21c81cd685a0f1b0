/// Holds back content that needs a laid-out window until the first frame
/// has been drawn.
///
/// Starts unmounted and flips exactly once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MountGate {
    mounted: bool,
}

impl MountGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Marks the gate as mounted. Returns `true` only on the first call.
    pub fn mark_mounted(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unmounted() {
        assert!(!MountGate::new().is_mounted());
    }

    #[test]
    fn test_mounts_exactly_once() {
        let mut gate = MountGate::new();

        assert!(gate.mark_mounted());
        assert!(gate.is_mounted());

        assert!(!gate.mark_mounted());
        assert!(gate.is_mounted());
    }
}
