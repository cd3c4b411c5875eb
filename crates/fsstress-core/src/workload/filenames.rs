use crate::config::consts::workload::FILE_PREFIX;

/// Synthetic filenames `test_0 .. test_{n-1}`, in ascending order
///
/// The iterator is lazy; call again to restart.
pub fn filenames(n: usize) -> impl Iterator<Item = String> + Clone {
    (0..n).map(|i| format!("{FILE_PREFIX}{i}"))
}
