use derive_new::new;

const BRANCH_ID_PREFIX: char = 'b';

/// Diagram-local participant identifier (`b1`, `b2`, ...).
///
/// Identifiers are handed out in creation order by the diagram and are never
/// reused, even after the branch they stand for has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct BranchId(usize);

impl BranchId {
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for BranchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", BRANCH_ID_PREFIX, self.0)
    }
}
