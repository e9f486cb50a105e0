use crate::error::{NetError, Result};

/// Input vectors paired with scalar targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl Dataset {
    /// Returns `NetError::Config` if the dataset is empty, the two sides
    /// differ in length, or the inputs differ in width.
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Dataset> {
        if inputs.is_empty() {
            return Err(NetError::Config("dataset must not be empty".into()));
        }
        if inputs.len() != targets.len() {
            return Err(NetError::Config(format!(
                "{} inputs but {} targets",
                inputs.len(),
                targets.len()
            )));
        }
        let width = inputs[0].len();
        if let Some(i) = inputs.iter().position(|x| x.len() != width) {
            return Err(NetError::Config(format!(
                "sample {i} has {} inputs, expected {width}",
                inputs[i].len()
            )));
        }
        Ok(Dataset { inputs, targets })
    }

    /// The XOR truth table.
    pub fn xor() -> Dataset {
        Dataset {
            inputs: vec![
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
            ],
            targets: vec![0.0, 1.0, 1.0, 0.0],
        }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Width of each input vector.
    pub fn input_size(&self) -> usize {
        self.inputs[0].len()
    }

    pub fn sample(&self, index: usize) -> (&[f64], f64) {
        (&self.inputs[index], self.targets[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[f64], f64)> + '_ {
        self.inputs.iter().map(Vec::as_slice).zip(self.targets.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_table() {
        let data = Dataset::xor();
        assert_eq!(data.len(), 4);
        assert_eq!(data.input_size(), 2);
        let rows: Vec<(Vec<f64>, f64)> = data.iter().map(|(x, y)| (x.to_vec(), y)).collect();
        assert_eq!(rows[1], (vec![0.0, 1.0], 1.0));
        assert_eq!(rows[3], (vec![1.0, 1.0], 0.0));
    }

    #[test]
    fn rejects_inconsistent_data() {
        assert!(Dataset::new(vec![], vec![]).is_err());
        assert!(Dataset::new(vec![vec![1.0]], vec![1.0, 0.0]).is_err());
        assert!(Dataset::new(vec![vec![1.0], vec![1.0, 2.0]], vec![1.0, 0.0]).is_err());
        assert!(Dataset::new(vec![vec![1.0], vec![2.0]], vec![1.0, 0.0]).is_ok());
    }
}
