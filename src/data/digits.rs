/// The fixed toy classification table: every three-digit string 000–999.
///
/// Inputs are the three digits as raw features; the one-hot class is decided
/// by the numeric value of the string (thirds at 333 and 666).
#[derive(Debug, Clone)]
pub struct DigitTable {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

/// Class index of a three-digit value.
pub fn class_of(value: usize) -> usize {
    if value < 333 {
        0
    } else if value < 666 {
        1
    } else {
        2
    }
}

/// Builds the full 1000-entry table, ordered by numeric value.
pub fn three_digit_table() -> DigitTable {
    let mut inputs = Vec::with_capacity(1000);
    let mut labels = Vec::with_capacity(1000);

    for i in 0..10 {
        for j in 0..10 {
            for k in 0..10 {
                let value = i * 100 + j * 10 + k;

                let mut one_hot = vec![0.0; 3];
                one_hot[class_of(value)] = 1.0;

                inputs.push(vec![i as f64, j as f64, k as f64]);
                labels.push(one_hot);
            }
        }
    }

    DigitTable { inputs, labels }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_thousand_entries() {
        let table = three_digit_table();
        assert_eq!(table.inputs.len(), 1000);
        assert_eq!(table.labels.len(), 1000);
    }

    #[test]
    fn entries_are_ordered_by_value() {
        let table = three_digit_table();
        assert_eq!(table.inputs[0], vec![0.0, 0.0, 0.0]);
        assert_eq!(table.inputs[407], vec![4.0, 0.0, 7.0]);
        assert_eq!(table.inputs[999], vec![9.0, 9.0, 9.0]);
    }

    #[test]
    fn labels_are_one_hot() {
        let table = three_digit_table();
        for label in &table.labels {
            assert_eq!(label.len(), 3);
            assert_eq!(label.iter().sum::<f64>(), 1.0);
            assert!(label.iter().all(|&v| v == 0.0 || v == 1.0));
        }
    }

    #[test]
    fn class_boundaries_fall_at_thirds() {
        assert_eq!(class_of(0), 0);
        assert_eq!(class_of(332), 0);
        assert_eq!(class_of(333), 1);
        assert_eq!(class_of(665), 1);
        assert_eq!(class_of(666), 2);
        assert_eq!(class_of(999), 2);

        let table = three_digit_table();
        assert_eq!(table.labels[332], vec![1.0, 0.0, 0.0]);
        assert_eq!(table.labels[333], vec![0.0, 1.0, 0.0]);
        assert_eq!(table.labels[666], vec![0.0, 0.0, 1.0]);
    }
}
