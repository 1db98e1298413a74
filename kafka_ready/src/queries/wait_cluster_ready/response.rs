#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterReady {
    pub broker_count: usize,
    /// Metadata requests issued, including failed ones.
    pub attempts: usize,
}
