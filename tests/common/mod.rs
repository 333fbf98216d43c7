#[cfg(test)]
mod cross_runner;
pub use cross_runner::CrossRunnerBuilder;

/// Assert that the report lines match, one by one.
#[macro_export]
macro_rules! validate_lines {
    ($output:expr, $expected:expr) => {
        let output = $output.to_string();
        let got: Vec<&str> = output.lines().collect();
        let want: Vec<&str> = $expected.to_vec();
        assert_eq!(want, got)
    };
}
