use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;

    /// Id of the `index`-th entry of a list rendered under this id.
    fn with_index(&self, index: usize) -> ElementId {
        self.with_suffix(format!("item:{index}"))
    }
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_ids_are_distinct() {
        let base = ElementId::from("projects");

        assert_ne!(base.with_index(0), base.with_index(1));
        assert_eq!(base.with_index(2), base.with_index(2));
        assert_ne!(base.with_index(0), ElementId::from("skills").with_index(0));
    }
}
