/// A 3x3 integer convolution kernel with its normalization divisor.
///
/// The weighted sum of a 3x3 neighborhood is divided by `divisor` with
/// truncating integer division before being clamped to the `u8` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3x3 {
    weights: [[i32; 3]; 3],
    divisor: i32,
}

impl Kernel3x3 {
    /// Create a new kernel.
    ///
    /// # Arguments
    ///
    /// * `weights` - The weights, indexed as `weights[ky + 1][kx + 1]`.
    /// * `divisor` - The normalization divisor. Must be non-zero to be applied.
    pub const fn new(weights: [[i32; 3]; 3], divisor: i32) -> Self {
        Self { weights, divisor }
    }

    /// The kernel weights, row-major.
    pub const fn weights(&self) -> &[[i32; 3]; 3] {
        &self.weights
    }

    /// The normalization divisor.
    pub const fn divisor(&self) -> i32 {
        self.divisor
    }

    /// Sum of all the weights.
    pub fn weight_sum(&self) -> i32 {
        self.weights.iter().flatten().sum()
    }
}

/// Binomial 3x3 blur kernel, normalized by 16.
pub const BLUR: Kernel3x3 = Kernel3x3::new([[1, 2, 1], [2, 4, 2], [1, 2, 1]], 16);

/// 3x3 sharpen kernel, divisor 1.
pub const SHARPEN: Kernel3x3 = Kernel3x3::new([[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]], 1);

/// The closed set of kernels used by the benchmark pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKernel {
    /// See [`BLUR`].
    Blur,
    /// See [`SHARPEN`].
    Sharpen,
}

impl FilterKernel {
    /// The kernel constant behind this variant.
    pub fn kernel(&self) -> &'static Kernel3x3 {
        match self {
            FilterKernel::Blur => &BLUR,
            FilterKernel::Sharpen => &SHARPEN,
        }
    }

    /// Lowercase name of the kernel.
    pub const fn name(&self) -> &'static str {
        match self {
            FilterKernel::Blur => "blur",
            FilterKernel::Sharpen => "sharpen",
        }
    }
}
