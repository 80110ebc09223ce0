//! Regression test parameters and operations

use bitmorph_core::{LabelMap, PackedImage};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results with expected values (default)
    #[default]
    Compare,
    /// Compare and also print every checked image
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check and every failure
/// seen so far. Checks never panic; call [`RegParams::cleanup`] at the end
/// and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "binmorph")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if the values differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two packed images for exact equality
    ///
    /// On mismatch the first differing pixel is reported together with
    /// both images rendered as ASCII.
    pub fn compare_images(&mut self, expected: &PackedImage, actual: &PackedImage) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("index {}:\n{}", self.index, actual.to_ascii());
        }

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            self.fail(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                if expected.get_pixel_unchecked(x, y) != actual.get_pixel_unchecked(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: image comparison for index {} - pixel mismatch \
                         at ({}, {})\nexpected:\n{}actual:\n{}",
                        self.test_name,
                        self.index,
                        x,
                        y,
                        expected.to_ascii(),
                        actual.to_ascii()
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        if expected.data() != actual.data() {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - padding bits differ\n{}",
                self.test_name,
                self.index,
                actual.to_bit_string()
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Compare a component count and check the map's label range
    ///
    /// The map must use exactly the labels `0..=expected`.
    pub fn compare_label_counts(&mut self, expected: u32, actual: u32, map: &LabelMap) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("index {}:\n{}", self.index, map.to_hex_string());
        }

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: label count for index {}: expected {}, got {}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            return false;
        }

        let max = map.max_label();
        if max != actual {
            let msg = format!(
                "Failure in {}_reg: label map for index {} uses labels up to {} \
                 but reports {} components",
                self.test_name, self.index, max, actual
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Record a boolean check
    pub fn compare_bool(&mut self, expected: bool, actual: bool, what: &str) -> bool {
        self.index += 1;
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: {} for index {}: expected {}, got {}",
                self.test_name, what, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_images() {
        let mut rp = RegParams::new("test");
        let a = PackedImage::from_ascii("#.\n.#").unwrap();
        let b = PackedImage::from_ascii("#.\n##").unwrap();
        assert!(rp.compare_images(&a, &a.clone()));
        assert!(!rp.compare_images(&a, &b));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_label_counts() {
        let mut rp = RegParams::new("test");
        let map = LabelMap::from_raw(2, 2, vec![1, 0, 0, 2]).unwrap();
        assert!(rp.compare_label_counts(2, 2, &map));
        assert!(!rp.compare_label_counts(2, 3, &map));
        assert!(!rp.compare_label_counts(3, 3, &map));
        assert_eq!(rp.failures().len(), 2);
    }
}
