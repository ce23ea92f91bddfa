use ndarray::ArrayView2;

/// Convert a binary transaction x item matrix into lists of column indices.
///
/// Any non-zero cell marks the column's item as present in that row.
pub fn transactions_from_matrix(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}
