//! This file provides the constants used by the conversion layer: the linear sRGB to CIE 1931 XYZ
//! matrix, the D65 reference white used to normalize XYZ before CIELAB, and the thresholds of the
//! two piecewise functions involved. The matrix is kept as an actual matrix instead of being spelled
//! out as nine multiplications so that its rows can be checked against the published sRGB primaries
//! at a glance.

use rulinalg::matrix::Matrix;

lazy_static! {
    /// Linear sRGB to XYZ, rows are X, Y, Z. These are the four-digit primaries found in most web
    /// implementations, and the ones the Y row of which sums to exactly 1.
    pub(crate) static ref SRGB_TO_XYZ: Matrix<f64> = matrix![0.4124, 0.3576, 0.1805;
                                                              0.2126, 0.7152, 0.0722;
                                                              0.0193, 0.1192, 0.9505];
}

/// D65 white point, normalized so that Y is 1.
pub(crate) const D65_WHITE_POINT: [f64; 3] = [0.95047, 1.00000, 1.08883];

/// Below this, gamma-encoded sRGB is linear.
pub(crate) const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// (6/29)^3, rounded the way the CIE publishes it.
pub(crate) const CIE_EPSILON: f64 = 0.008856;

/// (29/6)^2 / 3, rounded the way the CIE publishes it.
pub(crate) const CIE_KAPPA_SLOPE: f64 = 7.787;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use rulinalg::matrix::BaseMatrix;

    #[test]
    fn test_luminance_row_sums_to_one() {
        let row_sum: f64 = SRGB_TO_XYZ.row(1).raw_slice().iter().sum();
        assert!((row_sum - 1.0).abs() <= 1e-10);
    }

    #[test]
    fn test_matrix_shape() {
        assert_eq!(SRGB_TO_XYZ.rows(), 3);
        assert_eq!(SRGB_TO_XYZ.cols(), 3);
    }
}
